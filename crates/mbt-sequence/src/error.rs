//! Error types for sequence generation
//!
//! All variants are raised before any result is produced. Structural
//! problems found by the decoder are reported as
//! [`SequenceError::GraphStructure`], like those found during enumeration;
//! other decoder failures pass through untouched.

use mbt_graph::{DecodeError, GraphError};

/// Sequence generation errors
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    /// Strategy name is not one of the supported strategies
    #[error("Selected strategy is not available!")]
    UnsupportedStrategy(String),

    /// Coverage percentage outside `1..=100`
    #[error("coverage must be between 1 and 100, got {0}")]
    InvalidCoverage(u32),

    /// Graph cannot be enumerated (missing start node, bad endpoint)
    #[error("invalid graph structure: {0}")]
    GraphStructure(#[from] GraphError),

    /// Enumeration explored more paths than allowed
    #[error("path budget exceeded: more than {limit} paths explored")]
    PathBudgetExceeded {
        /// Configured budget
        limit: usize,
    },

    /// Decoding collaborator failed to read or parse the source
    #[error(transparent)]
    Decode(DecodeError),
}

impl From<DecodeError> for SequenceError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Structure(inner) => Self::GraphStructure(inner),
            other => Self::Decode(other),
        }
    }
}

impl SequenceError {
    /// Check if error was raised by input validation
    ///
    /// Validation failures are caller mistakes; retrying with the same
    /// input yields the same error.
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedStrategy(_) | Self::InvalidCoverage(_) | Self::GraphStructure(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_message_is_stable() {
        let err = SequenceError::UnsupportedStrategy("rando".into());
        assert_eq!(err.to_string(), "Selected strategy is not available!");
        assert!(err.is_validation());
    }

    #[test]
    fn decode_errors_are_transparent() {
        let inner = DecodeError::UnsupportedFormat("dot".into());
        let expected = inner.to_string();
        let err = SequenceError::from(inner);
        assert_eq!(err.to_string(), expected);
        assert!(!err.is_validation());
    }

    #[test]
    fn decoded_structure_errors_are_structural() {
        let inner = GraphError::UnknownEndpoint {
            edge: "e0".into(),
            node: "n9".into(),
        };
        let err = SequenceError::from(DecodeError::Structure(inner.clone()));
        assert!(matches!(err, SequenceError::GraphStructure(ref e) if *e == inner));
        assert!(err.is_validation());
    }
}
