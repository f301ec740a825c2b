//! Generator configuration

use crate::coverage::Coverage;
use crate::enumerator::PathEnumerator;
use mbt_graph::NodeId;
use serde::{Deserialize, Serialize};

/// Sequence generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Overrides the start node declared by the graph document
    pub start_node: Option<NodeId>,
    /// Maximum number of simple paths explored per enumeration
    pub max_paths: Option<usize>,
    /// Coverage used by the `random` strategy when none is requested
    pub default_coverage: Coverage,
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With start node override
    #[inline]
    #[must_use]
    pub fn with_start_node(mut self, start: impl Into<NodeId>) -> Self {
        self.start_node = Some(start.into());
        self
    }

    /// With path budget
    #[inline]
    #[must_use]
    pub fn with_max_paths(mut self, limit: usize) -> Self {
        self.max_paths = Some(limit);
        self
    }

    /// With default coverage
    #[inline]
    #[must_use]
    pub fn with_default_coverage(mut self, coverage: Coverage) -> Self {
        self.default_coverage = coverage;
        self
    }

    /// Enumerator honoring the path budget
    #[must_use]
    pub fn enumerator(&self) -> PathEnumerator {
        match self.max_paths {
            Some(limit) => PathEnumerator::new().with_max_paths(limit),
            None => PathEnumerator::new(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_node: None,
            max_paths: None,
            default_coverage: Coverage::FULL,
        }
    }
}
