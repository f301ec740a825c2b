//! Test suite model

use mbt_graph::NodeId;
use serde::{Deserialize, Serialize};

/// One action of a test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Drive the system along a transition
    Stimulus {
        /// Transition label, used as keyword name
        keyword: String,
    },
    /// Check the system is in a state
    Verify {
        /// State label, used as keyword name
        keyword: String,
    },
}

impl Step {
    /// Stimulus step for a transition label
    #[must_use]
    pub fn stimulus(keyword: impl Into<String>) -> Self {
        Self::Stimulus {
            keyword: keyword.into(),
        }
    }

    /// Verification step for a state label
    #[must_use]
    pub fn verify(keyword: impl Into<String>) -> Self {
        Self::Verify {
            keyword: keyword.into(),
        }
    }

    /// Keyword name of the step
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Self::Stimulus { keyword } | Self::Verify { keyword } => keyword,
        }
    }
}

/// A test case derived from one sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Name built from the labels along the walk
    pub name: String,
    /// The walk this case executes
    pub sequence: Vec<NodeId>,
    /// Ordered actions
    pub steps: Vec<Step>,
}

/// A named collection of test cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    /// Suite name
    pub name: String,
    /// Keyword libraries the suite imports
    pub imports: Vec<String>,
    /// Test cases in sequence order
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    /// Number of test cases
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Check if suite has no test cases
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Look up a test case by name
    #[must_use]
    pub fn case(&self, name: &str) -> Option<&TestCase> {
        self.cases.iter().find(|c| c.name == name)
    }
}
