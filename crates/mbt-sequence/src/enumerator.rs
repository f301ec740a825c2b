//! Full path enumeration
//!
//! One iterative depth-first walk from the start node visits every simple
//! path. Each visited prefix is a candidate (a simple path to its last
//! node), and whenever the walk arrives at `u` from `v` with `u -> v` also
//! present, the loop-closing walk `..., v, u, v` is a candidate as well.
//! Candidates that are a strict prefix of another candidate are dropped.

use crate::error::SequenceError;
use crate::sequence::Sequence;
use mbt_graph::{Graph, GraphError, NodeId};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Enumerates every maximal simple path from the start node
#[derive(Debug, Clone, Copy, Default)]
pub struct PathEnumerator {
    max_paths: Option<usize>,
}

/// Dense index view of a [`Graph`]
///
/// Indices follow node id order, so index vectors compare the same way as
/// the id sequences they stand for.
struct Adjacency<'g> {
    ids: Vec<&'g NodeId>,
    successors: Vec<Vec<usize>>,
    mutual: HashSet<(usize, usize)>,
}

impl<'g> Adjacency<'g> {
    fn new(graph: &'g Graph) -> Self {
        let ids: Vec<&NodeId> = graph.nodes().keys().collect();
        let position: HashMap<&NodeId, usize> =
            ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let successors = ids
            .iter()
            .map(|&id| graph.successors(id).into_iter().map(|s| position[s]).collect())
            .collect();
        let mutual = graph
            .cyclic_pairs()
            .into_iter()
            .map(|(u, v)| (position[u], position[v]))
            .collect();

        Self {
            ids,
            successors,
            mutual,
        }
    }

    fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    fn to_sequence(&self, path: &[usize]) -> Sequence {
        path.iter().map(|&i| self.ids[i].clone()).collect()
    }
}

impl PathEnumerator {
    /// Create enumerator without a path budget
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail once more than `limit` paths have been explored
    #[inline]
    #[must_use]
    pub fn with_max_paths(mut self, limit: usize) -> Self {
        self.max_paths = Some(limit);
        self
    }

    /// Configured path budget
    #[inline]
    #[must_use]
    pub fn max_paths(&self) -> Option<usize> {
        self.max_paths
    }

    /// Enumerate the non-redundant sequence set of `graph`
    ///
    /// Sequences are returned in lexicographic order of their node ids.
    ///
    /// # Errors
    /// - [`SequenceError::GraphStructure`] if the start node is missing
    /// - [`SequenceError::PathBudgetExceeded`] if the budget is exhausted
    pub fn enumerate(&self, graph: &Graph) -> Result<Vec<Sequence>, SequenceError> {
        tracing::info!("Generating full sequence...");
        let start_id = &graph.start_node()?.id;
        let adjacency = Adjacency::new(graph);
        let start = adjacency
            .index_of(start_id)
            .ok_or_else(|| GraphError::MissingStartNode(start_id.clone()))?;

        let candidates = self.walk(&adjacency, start)?;
        let sequences: Vec<Sequence> = drop_redundant(candidates)
            .iter()
            .map(|path| adjacency.to_sequence(path))
            .collect();

        tracing::info!("Sequence successfully generated: {} sequences", sequences.len());
        Ok(sequences)
    }

    /// Depth-first walk collecting every simple path plus loop closures
    fn walk(
        &self,
        adjacency: &Adjacency<'_>,
        start: usize,
    ) -> Result<BTreeSet<Vec<usize>>, SequenceError> {
        let mut candidates = BTreeSet::new();
        let mut on_path = vec![false; adjacency.ids.len()];
        let mut path = vec![start];
        // (node, next successor to try)
        let mut frames = vec![(start, 0usize)];
        let mut explored = 1usize;

        on_path[start] = true;
        candidates.insert(path.clone());

        while let Some(frame) = frames.last_mut() {
            let (node, cursor) = *frame;
            let Some(&next) = adjacency.successors[node].get(cursor) else {
                frames.pop();
                if let Some(done) = path.pop() {
                    on_path[done] = false;
                }
                continue;
            };
            frame.1 += 1;
            if on_path[next] {
                continue;
            }

            explored += 1;
            if let Some(limit) = self.max_paths {
                if explored > limit {
                    tracing::warn!("Path budget of {} exhausted", limit);
                    return Err(SequenceError::PathBudgetExceeded { limit });
                }
            }

            path.push(next);
            on_path[next] = true;
            frames.push((next, 0));
            candidates.insert(path.clone());

            if adjacency.mutual.contains(&(next, node)) {
                let mut closed = path.clone();
                closed.push(node);
                tracing::debug!("Closing loop {:?}", adjacency.to_sequence(&closed));
                candidates.insert(closed);
            }
        }

        Ok(candidates)
    }
}

/// Keep only candidates that are not a strict prefix of another
///
/// In lexicographic order every extension of a path directly follows it,
/// so comparing each path with its successor is enough.
fn drop_redundant(candidates: BTreeSet<Vec<usize>>) -> Vec<Vec<usize>> {
    let sorted: Vec<Vec<usize>> = candidates.into_iter().collect();
    let mut kept = Vec::with_capacity(sorted.len());
    for (i, path) in sorted.iter().enumerate() {
        let extended = sorted
            .get(i + 1)
            .is_some_and(|next| next.len() > path.len() && next.starts_with(path));
        if !extended {
            kept.push(path.clone());
        }
    }
    kept
}
