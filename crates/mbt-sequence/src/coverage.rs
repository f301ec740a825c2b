//! Coverage-driven sequence selection
//!
//! Picking the smallest set of paths that touches a given share of the
//! nodes is a set-cover instance. [`CoverageSelector`] runs a cheap,
//! deterministic greedy pass instead and makes no optimality claim.

use crate::enumerator::PathEnumerator;
use crate::error::SequenceError;
use crate::sequence::Sequence;
use mbt_graph::{Graph, NodeId};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

/// Node-coverage target in percent, always within `1..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Coverage(u8);

impl Coverage {
    /// Every node
    pub const FULL: Self = Self(100);

    /// Validate a percentage
    ///
    /// # Errors
    /// [`SequenceError::InvalidCoverage`] outside `1..=100`.
    pub fn new(percent: u32) -> Result<Self, SequenceError> {
        match u8::try_from(percent) {
            Ok(p) if (1..=100).contains(&p) => Ok(Self(p)),
            _ => Err(SequenceError::InvalidCoverage(percent)),
        }
    }

    /// Percentage value
    #[inline]
    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Number of nodes to touch out of `total_nodes`, rounded up
    #[inline]
    #[must_use]
    pub fn target(self, total_nodes: usize) -> usize {
        (total_nodes * usize::from(self.0)).div_ceil(100)
    }
}

impl Default for Coverage {
    fn default() -> Self {
        Self::FULL
    }
}

impl Display for Coverage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u32> for Coverage {
    type Error = SequenceError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Coverage> for u32 {
    fn from(value: Coverage) -> Self {
        u32::from(value.0)
    }
}

/// Greedy selection of enumerated paths meeting a coverage target
#[derive(Debug, Clone, Default)]
pub struct CoverageSelector {
    enumerator: PathEnumerator,
}

impl CoverageSelector {
    /// Create selector over a default enumerator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create selector over a configured enumerator
    #[inline]
    #[must_use]
    pub fn with_enumerator(enumerator: PathEnumerator) -> Self {
        Self { enumerator }
    }

    /// Enumerate `graph` and select sequences reaching `coverage`
    ///
    /// # Errors
    /// Whatever [`PathEnumerator::enumerate`] fails with.
    pub fn select(
        &self,
        graph: &Graph,
        coverage: Coverage,
    ) -> Result<Vec<Sequence>, SequenceError> {
        tracing::info!("Generating random sequence with {} coverage...", coverage);
        let candidates = self.enumerator.enumerate(graph)?;
        let chosen = select_from(candidates, graph.node_count(), coverage);
        tracing::info!("Sequence successfully generated: {} sequences", chosen.len());
        Ok(chosen)
    }
}

/// Select from already enumerated `candidates`
///
/// 1. Longest candidates first; ties keep enumeration order.
/// 2. Accept a candidate when its new nodes fit in the remaining budget
///    (`target - covered`), until the target is met.
/// 3. If nothing fit, return the single longest candidate (last one among
///    equally long candidates).
/// 4. If something fit but the target is still unmet, keep adding the
///    candidate with the most new nodes until the target is met or no
///    candidate adds anything.
///
/// The result keeps enumeration order and is empty only when `candidates` is.
#[must_use]
pub(crate) fn select_from(
    candidates: Vec<Sequence>,
    total_nodes: usize,
    coverage: Coverage,
) -> Vec<Sequence> {
    let target = coverage.target(total_nodes);
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by_key(|&i| Reverse(candidates[i].len()));

    let mut covered: HashSet<&NodeId> = HashSet::new();
    let mut chosen = vec![false; candidates.len()];
    let gain = |covered: &HashSet<&NodeId>, seq: &Sequence| {
        seq.iter()
            .filter(|n| !covered.contains(n))
            .collect::<HashSet<_>>()
            .len()
    };

    for &i in &order {
        if covered.len() >= target {
            break;
        }
        let new_nodes = gain(&covered, &candidates[i]);
        let remaining = target - covered.len();
        tracing::debug!(
            "Candidate {} adds {} nodes, {} remaining",
            i,
            new_nodes,
            remaining
        );
        if new_nodes > 0 && new_nodes <= remaining {
            chosen[i] = true;
            covered.extend(candidates[i].iter());
        }
    }

    if !chosen.contains(&true) {
        let longest = candidates
            .iter()
            .enumerate()
            .max_by_key(|(_, seq)| seq.len())
            .map(|(i, _)| i);
        return longest
            .map(|i| vec![candidates[i].clone()])
            .unwrap_or_default();
    }

    while covered.len() < target {
        let best = (0..candidates.len())
            .filter(|&i| !chosen[i])
            .map(|i| (i, gain(&covered, &candidates[i])))
            .fold(None, |best: Option<(usize, usize)>, (i, g)| match best {
                Some((_, bg)) if bg >= g => best,
                _ => Some((i, g)),
            });
        match best {
            Some((i, g)) if g > 0 => {
                chosen[i] = true;
                covered.extend(candidates[i].iter());
            }
            _ => break,
        }
    }

    if covered.len() < target {
        tracing::warn!(
            "Coverage target of {} nodes unreachable; selected sequences cover {}",
            target,
            covered.len()
        );
    }

    candidates
        .into_iter()
        .zip(chosen)
        .filter_map(|(seq, keep)| keep.then_some(seq))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::covered_nodes;

    fn seq(ids: &[&str]) -> Sequence {
        ids.iter().map(|&id| NodeId::from(id)).collect()
    }

    fn g4_paths() -> Vec<Sequence> {
        vec![
            seq(&["n0", "n1", "n0"]),
            seq(&["n0", "n1", "n2"]),
            seq(&["n0", "n1", "n3"]),
        ]
    }

    #[test]
    fn coverage_bounds() {
        assert!(matches!(Coverage::new(0), Err(SequenceError::InvalidCoverage(0))));
        assert!(matches!(Coverage::new(101), Err(SequenceError::InvalidCoverage(101))));
        assert!(matches!(Coverage::new(300), Err(SequenceError::InvalidCoverage(300))));
        assert_eq!(Coverage::new(1).unwrap().percent(), 1);
        assert_eq!(Coverage::default(), Coverage::FULL);
    }

    #[test]
    fn target_rounds_up() {
        assert_eq!(Coverage::new(1).unwrap().target(4), 1);
        assert_eq!(Coverage::new(60).unwrap().target(4), 3);
        assert_eq!(Coverage::new(50).unwrap().target(4), 2);
        assert_eq!(Coverage::FULL.target(7), 7);
    }

    #[test]
    fn coverage_deserializes_with_validation() {
        let ok: Coverage = serde_json::from_str("45").unwrap();
        assert_eq!(ok.percent(), 45);
        assert!(serde_json::from_str::<Coverage>("0").is_err());
    }

    #[test]
    fn falls_back_to_longest_when_nothing_fits() {
        let chosen = select_from(g4_paths(), 4, Coverage::new(1).unwrap());
        assert_eq!(chosen, vec![seq(&["n0", "n1", "n3"])]);
    }

    #[test]
    fn budget_rule_accepts_small_gains() {
        let chosen = select_from(g4_paths(), 4, Coverage::new(60).unwrap());
        assert_eq!(chosen, vec![seq(&["n0", "n1", "n0"]), seq(&["n0", "n1", "n2"])]);
    }

    #[test]
    fn full_coverage_takes_everything_needed() {
        let chosen = select_from(g4_paths(), 4, Coverage::FULL);
        assert_eq!(covered_nodes(&chosen).len(), 4);
    }

    #[test]
    fn completion_pass_closes_gap() {
        // First pick covers 2 of 4, the second adds 2 > remaining 1.
        let candidates = vec![
            seq(&["n0", "n1", "n0"]),
            seq(&["n0", "n2", "n3"]),
        ];
        let chosen = select_from(candidates.clone(), 4, Coverage::new(75).unwrap());
        assert_eq!(chosen, candidates);
    }

    #[test]
    fn unreachable_nodes_do_not_empty_the_result() {
        let chosen = select_from(vec![seq(&["n0", "n1"])], 5, Coverage::FULL);
        assert_eq!(chosen, vec![seq(&["n0", "n1"])]);
    }

    #[test]
    fn empty_candidates() {
        assert!(select_from(Vec::new(), 3, Coverage::FULL).is_empty());
    }
}
