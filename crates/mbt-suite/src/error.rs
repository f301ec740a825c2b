//! Error types for suite materialization

use mbt_graph::NodeId;
use std::path::PathBuf;

/// Suite building and report writing errors
#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    /// Sequence references a node the graph does not have
    #[error("sequence references unknown node '{0}'")]
    UnknownNode(NodeId),

    /// Consecutive sequence nodes are not joined by an edge
    #[error("no transition from '{from}' to '{to}'")]
    MissingTransition {
        /// Source node
        from: NodeId,
        /// Target node
        to: NodeId,
    },

    /// IO error writing a report
    #[error("io error writing {path}: {source}")]
    Io {
        /// Report path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Suite could not be serialized
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SuiteError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
