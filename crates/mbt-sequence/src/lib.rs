//! MBT Sequence Generation
//!
//! Derives test-execution sequences from a state graph.
//!
//! # Core Concepts
//!
//! - [`PathEnumerator`]: every maximal simple path from the start node,
//!   with direct two-node loops closed and redundant prefixes removed
//! - [`CoverageSelector`]: greedy subset of the enumeration meeting a
//!   node-coverage target
//! - [`SequenceGenerationService`]: validates the strategy, decodes the
//!   graph and dispatches to one of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use mbt_sequence::{GenerationParams, SequenceGenerationService};
//!
//! let service = SequenceGenerationService::with_defaults();
//! let output = service.generate(
//!     Path::new("coffee_machine.json"),
//!     "random",
//!     GenerationParams::with_coverage(60),
//! )?;
//! for sequence in &output.sequences {
//!     println!("{}", mbt_sequence::display_sequence(sequence));
//! }
//! ```
//!
//! Only direct mutual edges (`u -> v`, `v -> u`) are closed into loop
//! sequences; longer cycles are cut at the first revisit.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod coverage;
mod enumerator;
mod error;
mod sequence;
mod service;

pub use config::GeneratorConfig;
pub use coverage::{Coverage, CoverageSelector};
pub use enumerator::PathEnumerator;
pub use error::SequenceError;
pub use sequence::{covered_nodes, display_sequence, is_strict_prefix, validate_sequence, Sequence};
pub use service::{GenerationOutput, GenerationParams, SequenceGenerationService, Strategy};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
