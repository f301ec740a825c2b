//! Sequence generation facade
//!
//! Validates the requested strategy before touching the graph source, then
//! decodes and dispatches to [`PathEnumerator`] or [`CoverageSelector`].

use crate::config::GeneratorConfig;
use crate::coverage::{Coverage, CoverageSelector};
use crate::enumerator::PathEnumerator;
use crate::error::SequenceError;
use crate::sequence::Sequence;
use mbt_graph::{Edge, FileDecoder, Graph, GraphDecoder, Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

/// Path generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Every non-redundant path
    Full,
    /// Greedy subset meeting a coverage target
    Random,
}

impl Strategy {
    /// Accepted strategies
    pub const AVAILABLE: [Self; 2] = [Self::Random, Self::Full];

    /// Canonical name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Random => "random",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SequenceError;

    /// Case-insensitive parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::AVAILABLE
            .into_iter()
            .find(|strategy| strategy.as_str() == wanted)
            .ok_or_else(|| SequenceError::UnsupportedStrategy(s.to_string()))
    }
}

/// Strategy parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationParams {
    /// Coverage percentage for `random`; the configured default when `None`
    pub coverage: Option<u32>,
}

impl GenerationParams {
    /// Parameters requesting a coverage percentage
    #[inline]
    #[must_use]
    pub fn with_coverage(coverage: u32) -> Self {
        Self {
            coverage: Some(coverage),
        }
    }
}

/// Decoded graph plus the generated sequences
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    /// Strategy that produced `sequences`
    pub strategy: Strategy,
    /// Graph the sequences walk
    pub graph: Graph,
    /// Generated sequences
    pub sequences: Vec<Sequence>,
}

impl GenerationOutput {
    /// Node map of the decoded graph
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        self.graph.nodes()
    }

    /// Edges of the decoded graph
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    /// Split into `(nodes, edges, sequences)`
    #[must_use]
    pub fn into_parts(self) -> (BTreeMap<NodeId, Node>, Vec<Edge>, Vec<Sequence>) {
        let (nodes, edges) = self.graph.into_parts();
        (nodes, edges, self.sequences)
    }
}

/// Entry point for sequence generation
///
/// Holds no per-call state; one instance can serve any number of graphs.
#[derive(Debug, Clone, Default)]
pub struct SequenceGenerationService<D = FileDecoder> {
    decoder: D,
    config: GeneratorConfig,
}

impl SequenceGenerationService<FileDecoder> {
    /// Service reading graph files by extension with default configuration
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }
}

impl<D: GraphDecoder> SequenceGenerationService<D> {
    /// Create service over a decoder
    #[must_use]
    pub fn new(decoder: D, config: GeneratorConfig) -> Self {
        Self { decoder, config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Decode `source` and generate sequences with the named strategy
    ///
    /// The strategy name and coverage are validated before the decoder is
    /// invoked.
    ///
    /// # Errors
    /// - [`SequenceError::UnsupportedStrategy`] for unknown strategy names
    /// - [`SequenceError::InvalidCoverage`] for `random` outside `1..=100`
    /// - [`SequenceError::Decode`] with the decoder's error unchanged
    /// - enumeration failures
    pub fn generate(
        &self,
        source: &Path,
        strategy: &str,
        params: GenerationParams,
    ) -> Result<GenerationOutput, SequenceError> {
        let strategy: Strategy = strategy.parse()?;
        let coverage = self.resolve_coverage(strategy, params)?;

        let graph = self.decoder.decode(source)?;
        self.dispatch(graph, strategy, coverage)
    }

    /// Generate sequences for an already decoded graph
    ///
    /// # Errors
    /// Same as [`Self::generate`] minus decoding.
    pub fn generate_from_graph(
        &self,
        graph: Graph,
        strategy: Strategy,
        params: GenerationParams,
    ) -> Result<GenerationOutput, SequenceError> {
        let coverage = self.resolve_coverage(strategy, params)?;
        self.dispatch(graph, strategy, coverage)
    }

    fn resolve_coverage(
        &self,
        strategy: Strategy,
        params: GenerationParams,
    ) -> Result<Option<Coverage>, SequenceError> {
        match (strategy, params.coverage) {
            (Strategy::Random, Some(percent)) => Coverage::new(percent).map(Some),
            (Strategy::Random, None) => Ok(Some(self.config.default_coverage)),
            (Strategy::Full, Some(percent)) => {
                tracing::debug!("Ignoring coverage {}% for full strategy", percent);
                Ok(None)
            }
            (Strategy::Full, None) => Ok(None),
        }
    }

    fn dispatch(
        &self,
        graph: Graph,
        strategy: Strategy,
        coverage: Option<Coverage>,
    ) -> Result<GenerationOutput, SequenceError> {
        let graph = match &self.config.start_node {
            Some(start) => graph.with_start(start.clone()),
            None => graph,
        };
        let enumerator: PathEnumerator = self.config.enumerator();

        let sequences = match strategy {
            Strategy::Random => {
                let coverage = coverage.unwrap_or(self.config.default_coverage);
                CoverageSelector::with_enumerator(enumerator).select(&graph, coverage)?
            }
            Strategy::Full => enumerator.enumerate(&graph)?,
        };

        Ok(GenerationOutput {
            strategy,
            graph,
            sequences,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parse_is_case_insensitive() {
        assert_eq!("FULL".parse::<Strategy>().unwrap(), Strategy::Full);
        assert_eq!("Random".parse::<Strategy>().unwrap(), Strategy::Random);
        let err = "rando".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, SequenceError::UnsupportedStrategy(ref s) if s == "rando"));
    }

    #[test]
    fn coverage_defaults_for_random_only() {
        let service = SequenceGenerationService::with_defaults();
        assert_eq!(
            service.resolve_coverage(Strategy::Random, GenerationParams::default()).unwrap(),
            Some(Coverage::FULL)
        );
        assert_eq!(
            service.resolve_coverage(Strategy::Full, GenerationParams::with_coverage(0)).unwrap(),
            None
        );
        assert!(service
            .resolve_coverage(Strategy::Random, GenerationParams::with_coverage(101))
            .is_err());
    }
}
