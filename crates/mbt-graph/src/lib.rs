//! MBT Graph Model
//!
//! Immutable directed labeled graph of states (nodes) and transitions
//! (edges), plus the decoders that turn graph documents into it.
//!
//! # Core Concepts
//!
//! - [`Graph`]: read-only state graph with a distinguished start node
//! - [`GraphBuilder`]: validating constructor for [`Graph`]
//! - [`GraphDecoder`]: seam for graph interchange formats
//! - [`GraphmlDecoder`]: diagram editor exports
//! - [`FileDecoder`]: picks a decoder from the file extension
//!
//! # Example
//!
//! ```rust
//! use mbt_graph::{Edge, GraphBuilder, Node};
//!
//! let mut builder = GraphBuilder::new("n0");
//! builder.add_node(Node::new("n0", "Idle")).unwrap();
//! builder.add_node(Node::new("n1", "Ready")).unwrap();
//! builder.add_edge(Edge::new("e0", "n0", "n1", "insert coin")).unwrap();
//! let graph = builder.build();
//!
//! assert_eq!(graph.successors(&"n0".into()).len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod decode;
mod error;
mod graph;
mod graphml;
mod types;

pub use decode::{
    EdgeRecord, FileDecoder, GraphDecoder, GraphDocument, JsonDecoder, NodeRecord, YamlDecoder,
};
pub use error::{DecodeError, GraphError};
pub use graph::{Graph, GraphBuilder};
pub use graphml::GraphmlDecoder;
pub use types::{Edge, EdgeId, Node, NodeId, DEFAULT_START_NODE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
