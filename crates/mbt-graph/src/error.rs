//! Error types for the graph model
//!
//! - [`GraphError`]: structural violations (unknown endpoints, duplicates, missing start)
//! - [`DecodeError`]: failures turning a graph document into a [`Graph`](crate::Graph)

use crate::types::{EdgeId, NodeId};
use std::path::PathBuf;

/// Structural violations of the state graph
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Start node is not part of the node set
    #[error("start node '{0}' does not exist in the graph")]
    MissingStartNode(NodeId),

    /// Edge references a node that was never declared
    #[error("edge '{edge}' references unknown node '{node}'")]
    UnknownEndpoint {
        /// Offending edge
        edge: EdgeId,
        /// Undeclared node
        node: NodeId,
    },

    /// Two nodes share an id
    #[error("duplicate node id '{0}'")]
    DuplicateNode(NodeId),

    /// Two edges share an id
    #[error("duplicate edge id '{0}'")]
    DuplicateEdge(EdgeId),
}

/// Errors from graph document decoders
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// No decoder for the file extension
    #[error("unsupported graph format: '{0}'")]
    UnsupportedFormat(String),

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Document is not well-formed for its format
    #[error("syntax error in {path}: {message}")]
    Syntax {
        /// File being decoded
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Document decoded but describes an invalid graph
    #[error("invalid graph structure: {0}")]
    Structure(#[from] GraphError),
}

impl DecodeError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create syntax error for path
    pub fn syntax_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            message: message.into(),
        }
    }
}
