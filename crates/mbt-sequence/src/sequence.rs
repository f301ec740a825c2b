//! Sequence helpers

use mbt_graph::{Graph, NodeId};
use std::collections::BTreeSet;

/// Ordered node ids of one test walk, beginning at the start node
pub type Sequence = Vec<NodeId>;

/// Union of the node ids touched by `sequences`
#[must_use]
pub fn covered_nodes<'a, I>(sequences: I) -> BTreeSet<&'a NodeId>
where
    I: IntoIterator<Item = &'a Sequence>,
{
    sequences.into_iter().flatten().collect()
}

/// Check if `prefix` is a strict prefix of `other`
#[inline]
#[must_use]
pub fn is_strict_prefix(prefix: &[NodeId], other: &[NodeId]) -> bool {
    prefix.len() < other.len() && other.starts_with(prefix)
}

/// Check that `sequence` starts at the start node and only follows edges
#[must_use]
pub fn validate_sequence(graph: &Graph, sequence: &[NodeId]) -> bool {
    sequence.first() == Some(graph.start())
        && sequence.windows(2).all(|w| graph.has_edge(&w[0], &w[1]))
}

/// Render as `n0 -> n1 -> n2`
#[must_use]
pub fn display_sequence(sequence: &[NodeId]) -> String {
    sequence
        .iter()
        .map(NodeId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
