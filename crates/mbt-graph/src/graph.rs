//! State graph and its builder
//!
//! [`Graph`] is read-only once built. Node and edge payloads live in ordered
//! collections; the petgraph digraph only indexes adjacency.

use crate::error::GraphError;
use crate::types::{Edge, EdgeId, Node, NodeId};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Directed labeled state graph with a distinguished start node
///
/// The start node is not required to exist; operations that need it go
/// through [`Graph::start_node`], which reports
/// [`GraphError::MissingStartNode`].
#[derive(Debug, Clone)]
pub struct Graph {
    start: NodeId,
    nodes: BTreeMap<NodeId, Node>,
    edges: Vec<Edge>,
    /// Edge weight is the position of the edge in `edges`
    inner: DiGraph<NodeId, usize>,
    indices: HashMap<NodeId, NodeIndex>,
}

impl Graph {
    /// Id of the start node
    #[inline]
    #[must_use]
    pub fn start(&self) -> &NodeId {
        &self.start
    }

    /// Resolve the start node
    ///
    /// # Errors
    /// [`GraphError::MissingStartNode`] when the start id is not a node.
    pub fn start_node(&self) -> Result<&Node, GraphError> {
        self.nodes
            .get(&self.start)
            .ok_or_else(|| GraphError::MissingStartNode(self.start.clone()))
    }

    /// Same graph rooted at a different start node
    #[must_use]
    pub fn with_start(mut self, start: impl Into<NodeId>) -> Self {
        self.start = start.into();
        self
    }

    /// Look up a node
    #[inline]
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Check node membership
    #[inline]
    #[must_use]
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes keyed by id
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    /// All edges in declaration order
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Split into the node map and edge list
    #[must_use]
    pub fn into_parts(self) -> (BTreeMap<NodeId, Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Distinct successors of a node, sorted by id
    ///
    /// Unknown nodes have no successors.
    #[must_use]
    pub fn successors(&self, id: &NodeId) -> Vec<&NodeId> {
        let Some(&idx) = self.indices.get(id) else {
            return Vec::new();
        };
        let mut out: Vec<&NodeId> = self
            .inner
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| &self.inner[n])
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Check whether a transition `from -> to` exists
    #[must_use]
    pub fn has_edge(&self, from: &NodeId, to: &NodeId) -> bool {
        match (self.indices.get(from), self.indices.get(to)) {
            (Some(&a), Some(&b)) => self.inner.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// First declared edge for the ordered pair `from -> to`
    #[must_use]
    pub fn edge_between(&self, from: &NodeId, to: &NodeId) -> Option<&Edge> {
        let (&a, &b) = (self.indices.get(from)?, self.indices.get(to)?);
        self.inner
            .edges_connecting(a, b)
            .map(|e| *e.weight())
            .min()
            .map(|pos| &self.edges[pos])
    }

    /// Ordered pairs `(u, v)` where both `u -> v` and `v -> u` exist
    ///
    /// Both orientations of a mutual pair are reported. Self-loops are not
    /// cyclic pairs.
    #[must_use]
    pub fn cyclic_pairs(&self) -> Vec<(&NodeId, &NodeId)> {
        let mut pairs: Vec<(&NodeId, &NodeId)> = self
            .edges
            .iter()
            .filter(|e| e.from != e.to && self.has_edge(&e.to, &e.from))
            .map(|e| (&e.from, &e.to))
            .collect();
        pairs.sort();
        pairs.dedup();
        pairs
    }
}

/// Validating constructor for [`Graph`]
///
/// Nodes must be declared before the edges that reference them.
#[derive(Debug)]
pub struct GraphBuilder {
    start: NodeId,
    nodes: BTreeMap<NodeId, Node>,
    edges: Vec<Edge>,
    edge_ids: HashSet<EdgeId>,
    pairs: HashSet<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Create a builder whose graph starts at `start`
    #[must_use]
    pub fn new(start: impl Into<NodeId>) -> Self {
        Self {
            start: start.into(),
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            edge_ids: HashSet::new(),
            pairs: HashSet::new(),
        }
    }

    /// Add a node
    ///
    /// # Errors
    /// [`GraphError::DuplicateNode`] if the id was already declared.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Add an edge between two declared nodes
    ///
    /// # Errors
    /// [`GraphError::UnknownEndpoint`] for undeclared endpoints,
    /// [`GraphError::DuplicateEdge`] if the edge id was already used.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        for endpoint in [&edge.from, &edge.to] {
            if !self.nodes.contains_key(endpoint) {
                return Err(GraphError::UnknownEndpoint {
                    edge: edge.id.clone(),
                    node: endpoint.clone(),
                });
            }
        }
        if !self.edge_ids.insert(edge.id.clone()) {
            return Err(GraphError::DuplicateEdge(edge.id));
        }
        if !self.pairs.insert((edge.from.clone(), edge.to.clone())) {
            tracing::warn!(
                "Parallel transition '{}' from '{}' to '{}'; sequences only distinguish node pairs",
                edge.id,
                edge.from,
                edge.to
            );
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Number of nodes declared so far
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Freeze into a read-only [`Graph`]
    #[must_use]
    pub fn build(self) -> Graph {
        let mut inner = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut indices = HashMap::with_capacity(self.nodes.len());
        for id in self.nodes.keys() {
            indices.insert(id.clone(), inner.add_node(id.clone()));
        }
        for (pos, edge) in self.edges.iter().enumerate() {
            inner.add_edge(indices[&edge.from], indices[&edge.to], pos);
        }

        Graph {
            start: self.start,
            nodes: self.nodes,
            edges: self.edges,
            inner,
            indices,
        }
    }
}
