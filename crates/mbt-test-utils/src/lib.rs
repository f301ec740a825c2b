//! Testing utilities for MBT workspace
//!
//! Shared fixture graphs, a call-counting decoder, and proptest strategies.

#![allow(missing_docs)]

use mbt_graph::{DecodeError, Edge, Graph, GraphBuilder, GraphDecoder, Node, NodeId};
use proptest::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Build a graph whose node labels are upper-cased ids and edge labels are `from_to`
pub fn graph_from_edges(start: &str, nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut builder = GraphBuilder::new(start);
    for &id in nodes {
        builder.add_node(Node::new(id, id.to_uppercase())).unwrap();
    }
    for (i, &(from, to)) in edges.iter().enumerate() {
        builder
            .add_edge(Edge::new(format!("e{i}").as_str(), from, to, format!("{from}_{to}")))
            .unwrap();
    }
    builder.build()
}

/// n0 <-> n1, n1 -> n2, n1 -> n3
pub fn four_node_loop() -> Graph {
    graph_from_edges(
        "n0",
        &["n0", "n1", "n2", "n3"],
        &[("n0", "n1"), ("n1", "n0"), ("n1", "n2"), ("n1", "n3")],
    )
}

/// Coffee machine with real labels
pub fn coffee_machine() -> Graph {
    let mut b = GraphBuilder::new("n0");
    b.add_node(Node::new("n0", "Machine Off")).unwrap();
    b.add_node(Node::new("n1", "Machine Idle")).unwrap();
    b.add_node(Node::new("n2", "Coin Inserted")).unwrap();
    b.add_node(Node::new("n3", "Coffee Served")).unwrap();
    b.add_edge(Edge::new("e0", "n0", "n1", "Switch On")).unwrap();
    b.add_edge(Edge::new("e1", "n1", "n0", "Switch Off")).unwrap();
    b.add_edge(Edge::new("e2", "n1", "n2", "Insert Coin")).unwrap();
    b.add_edge(Edge::new("e3", "n2", "n1", "Return Coin")).unwrap();
    b.add_edge(Edge::new("e4", "n2", "n3", "Press Coffee")).unwrap();
    b.build()
}

pub fn seq(ids: &[&str]) -> Vec<NodeId> {
    ids.iter().map(|&id| NodeId::from(id)).collect()
}

/// Decoder returning a fixed graph and counting calls
#[derive(Debug)]
pub struct SpyDecoder {
    graph: Graph,
    calls: AtomicUsize,
    sources: Mutex<Vec<PathBuf>>,
}

impl SpyDecoder {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            calls: AtomicUsize::new(0),
            sources: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sources(&self) -> Vec<PathBuf> {
        self.sources.lock().unwrap().clone()
    }
}

impl GraphDecoder for SpyDecoder {
    fn decode(&self, source: &Path) -> Result<Graph, DecodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sources.lock().unwrap().push(source.to_path_buf());
        Ok(self.graph.clone())
    }

    fn name(&self) -> &'static str {
        "spy"
    }
}

/// Random graphs over nodes `n0..n{size}` rooted at `n0`
pub fn arb_graph(max_nodes: usize, max_edges: usize) -> impl Strategy<Value = Graph> {
    (1..=max_nodes).prop_flat_map(move |size| {
        proptest::collection::vec((0..size, 0..size), 0..=max_edges).prop_map(move |pairs| {
            let names: Vec<String> = (0..size).map(|i| format!("n{i}")).collect();
            let mut builder = GraphBuilder::new("n0");
            for name in &names {
                builder.add_node(Node::new(name.as_str(), name.to_uppercase())).unwrap();
            }
            let mut seen = std::collections::HashSet::new();
            for (from, to) in pairs {
                if seen.insert((from, to)) {
                    let id = format!("e{}", seen.len());
                    let (from, to) = (names[from].as_str(), names[to].as_str());
                    builder.add_edge(Edge::new(id.as_str(), from, to, "")).unwrap();
                }
            }
            builder.build()
        })
    })
}
