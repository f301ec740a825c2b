//! Node and edge identity and payload types

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Conventional id of the node every sequence starts from
pub const DEFAULT_START_NODE: &str = "n0";

/// State identifier
///
/// Ordering is plain string ordering; it drives the deterministic ordering of
/// successors and of generated sequences.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create new node id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Transition identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    /// Create new edge id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A state of the system under test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique id
    pub id: NodeId,
    /// Human-readable state name
    pub label: String,
    /// Layout metadata from the diagram editor, carried but never interpreted
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub position: serde_json::Value,
}

impl Node {
    /// Create node without positional metadata
    #[must_use]
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position: serde_json::Value::Null,
        }
    }

    /// Attach positional metadata
    #[must_use]
    pub fn with_position(mut self, position: serde_json::Value) -> Self {
        self.position = position;
        self
    }
}

/// A labeled transition between two states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique id
    pub id: EdgeId,
    /// Source state
    pub from: NodeId,
    /// Target state
    pub to: NodeId,
    /// Action or transition name
    pub label: String,
}

impl Edge {
    /// Create new edge
    #[must_use]
    pub fn new(
        id: impl Into<EdgeId>,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_orders_as_string() {
        let mut ids: Vec<NodeId> = vec!["n2".into(), "n10".into(), "n0".into()];
        ids.sort();
        assert_eq!(ids, vec![NodeId::new("n0"), "n10".into(), "n2".into()]);
    }

    #[test]
    fn node_serializes_without_null_position() {
        let node = Node::new("n0", "Idle");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"id":"n0","label":"Idle"}"#);

        let placed = node.with_position(serde_json::json!({"x": 1.0, "y": 2.0}));
        let json = serde_json::to_value(&placed).unwrap();
        assert_eq!(json["position"]["x"], 1.0);
    }
}
