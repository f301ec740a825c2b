//! Sequence to test case conversion

use crate::error::SuiteError;
use crate::suite::{Step, TestCase, TestSuite};
use mbt_graph::{Graph, NodeId};
use std::collections::HashMap;

/// Default separator between labels in test case names
pub const DEFAULT_SEPARATOR: &str = "->";

/// Builds [`TestSuite`] values from generated sequences
///
/// The builder keeps no suite between calls; every call returns a fresh
/// suite.
#[derive(Debug, Clone)]
pub struct SuiteBuilder {
    separator: String,
}

impl Default for SuiteBuilder {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl SuiteBuilder {
    /// Create builder with the default `->` separator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different label separator in test case names
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Create a suite with one test case per sequence
    ///
    /// Cases whose names collide get a ` #k` suffix, counting from 2.
    ///
    /// # Errors
    /// [`SuiteError::UnknownNode`] or [`SuiteError::MissingTransition`] when
    /// a sequence does not walk `graph`.
    pub fn create_suite(
        &self,
        name: &str,
        graph: &Graph,
        sequences: &[Vec<NodeId>],
        imports: &[String],
    ) -> Result<TestSuite, SuiteError> {
        tracing::info!("Creating '{}' Test Suite...", name);
        for import in imports {
            tracing::debug!("Importing '{}' library", import);
        }

        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut cases = Vec::with_capacity(sequences.len());
        for sequence in sequences {
            let mut case = self.create_case(graph, sequence)?;
            let count = seen.entry(case.name.clone()).or_insert(0);
            *count += 1;
            if *count > 1 {
                case.name = format!("{} #{}", case.name, count);
            }
            cases.push(case);
        }

        tracing::info!("Test Suite successfully created with {} test cases", cases.len());
        Ok(TestSuite {
            name: name.to_string(),
            imports: imports.to_vec(),
            cases,
        })
    }

    /// Convert a single sequence
    ///
    /// # Errors
    /// Same as [`Self::create_suite`].
    pub fn create_case(&self, graph: &Graph, sequence: &[NodeId]) -> Result<TestCase, SuiteError> {
        let mut labels: Vec<&str> = Vec::with_capacity(sequence.len() * 2);
        let mut steps = Vec::with_capacity(sequence.len().saturating_sub(1) * 2);

        if let Some(first) = sequence.first() {
            labels.push(label_of(graph, first)?);
        }
        for pair in sequence.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            let edge = graph
                .edge_between(from, to)
                .ok_or_else(|| SuiteError::MissingTransition {
                    from: from.clone(),
                    to: to.clone(),
                })?;
            let target = label_of(graph, to)?;

            if !edge.label.is_empty() {
                labels.push(&edge.label);
            }
            labels.push(target);
            steps.push(Step::stimulus(edge.label.as_str()));
            steps.push(Step::verify(target));
        }

        let name = labels.join(self.separator.as_str());
        tracing::debug!("Test name '{}' generated for {:?}", name, sequence);
        Ok(TestCase {
            name,
            sequence: sequence.to_vec(),
            steps,
        })
    }
}

fn label_of<'g>(graph: &'g Graph, id: &NodeId) -> Result<&'g str, SuiteError> {
    graph
        .node(id)
        .map(|n| n.label.as_str())
        .ok_or_else(|| SuiteError::UnknownNode(id.clone()))
}
