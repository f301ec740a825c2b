//! Graph document decoders
//!
//! A graph document lists nodes and edges the way diagram editors export
//! them. Decoders read a document from disk and hand back a validated
//! [`Graph`]; the generation service only sees the [`GraphDecoder`] trait.

use crate::error::{DecodeError, GraphError};
use crate::graph::{Graph, GraphBuilder};
use crate::graphml::GraphmlDecoder;
use crate::types::{Edge, Node, DEFAULT_START_NODE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Turns a graph source into a [`Graph`]
pub trait GraphDecoder: Send + Sync + std::fmt::Debug {
    /// Decode the graph stored at `source`
    ///
    /// # Errors
    /// IO, syntax or structural failures as [`DecodeError`].
    fn decode(&self, source: &Path) -> Result<Graph, DecodeError>;

    /// Decoder name (for logging)
    fn name(&self) -> &'static str;
}

impl<T: GraphDecoder + ?Sized> GraphDecoder for &T {
    fn decode(&self, source: &Path) -> Result<Graph, DecodeError> {
        (**self).decode(source)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: GraphDecoder + ?Sized> GraphDecoder for Box<T> {
    fn decode(&self, source: &Path) -> Result<Graph, DecodeError> {
        (**self).decode(source)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Serialized form of a state graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Start node id; defaults to [`DEFAULT_START_NODE`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Declared states
    pub nodes: Vec<NodeRecord>,
    /// Declared transitions
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// Serialized node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node id
    pub id: String,
    /// State name; the id is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Opaque layout data
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub position: serde_json::Value,
}

/// Serialized edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Edge id; `e{index}` is assigned when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Source node id
    pub source: String,
    /// Target node id
    pub target: String,
    /// Transition name
    #[serde(default)]
    pub label: String,
}

impl GraphDocument {
    /// Validate and convert into a [`Graph`]
    ///
    /// # Errors
    /// Any [`GraphError`] raised by [`GraphBuilder`].
    pub fn into_graph(self) -> Result<Graph, GraphError> {
        let start = self.start.unwrap_or_else(|| DEFAULT_START_NODE.to_string());
        let mut builder = GraphBuilder::new(start);

        for record in self.nodes {
            let label = record.label.unwrap_or_else(|| record.id.clone());
            builder.add_node(Node::new(record.id, label).with_position(record.position))?;
        }
        for (index, record) in self.edges.into_iter().enumerate() {
            let id = record.id.unwrap_or_else(|| format!("e{index}"));
            builder.add_edge(Edge::new(id.as_str(), record.source, record.target, record.label))?;
        }

        Ok(builder.build())
    }
}

pub(crate) fn read_source(source: &Path) -> Result<String, DecodeError> {
    std::fs::read_to_string(source).map_err(|e| DecodeError::io_error(source, e))
}

/// JSON graph documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Decode a JSON document held in memory
    ///
    /// # Errors
    /// Syntax or structural failures as [`DecodeError`].
    pub fn decode_str(&self, text: &str, origin: &Path) -> Result<Graph, DecodeError> {
        let doc: GraphDocument = serde_json::from_str(text)
            .map_err(|e| DecodeError::syntax_error(origin, e.to_string()))?;
        Ok(doc.into_graph()?)
    }
}

impl GraphDecoder for JsonDecoder {
    fn decode(&self, source: &Path) -> Result<Graph, DecodeError> {
        let text = read_source(source)?;
        self.decode_str(&text, source)
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

/// YAML graph documents
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDecoder;

impl YamlDecoder {
    /// Decode a YAML document held in memory
    ///
    /// # Errors
    /// Syntax or structural failures as [`DecodeError`].
    pub fn decode_str(&self, text: &str, origin: &Path) -> Result<Graph, DecodeError> {
        let doc: GraphDocument = serde_yaml::from_str(text)
            .map_err(|e| DecodeError::syntax_error(origin, e.to_string()))?;
        Ok(doc.into_graph()?)
    }
}

impl GraphDecoder for YamlDecoder {
    fn decode(&self, source: &Path) -> Result<Graph, DecodeError> {
        let text = read_source(source)?;
        self.decode_str(&text, source)
    }

    fn name(&self) -> &'static str {
        "yaml"
    }
}

/// Chooses a decoder from the file extension
///
/// `.json` → [`JsonDecoder`], `.yaml`/`.yml` → [`YamlDecoder`],
/// `.graphml`/`.xml` → [`GraphmlDecoder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDecoder;

impl GraphDecoder for FileDecoder {
    fn decode(&self, source: &Path) -> Result<Graph, DecodeError> {
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let decoder: &dyn GraphDecoder = match ext.as_str() {
            "json" => &JsonDecoder,
            "yaml" | "yml" => &YamlDecoder,
            "graphml" | "xml" => &GraphmlDecoder,
            _ => return Err(DecodeError::UnsupportedFormat(ext)),
        };

        tracing::info!("Decoding '{}' graph file...", source.display());
        let graph = decoder.decode(source)?;
        tracing::info!(
            "Graph decoded with {} decoder: {} nodes, {} edges",
            decoder.name(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
