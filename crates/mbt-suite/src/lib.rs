//! MBT Test Suite Materialization
//!
//! Turns node-id sequences into test cases: each case is named after the
//! states and transitions it walks, and each step becomes a stimulus
//! (transition label) followed by a verification (state label).
//!
//! - [`SuiteBuilder`]: sequences → [`TestSuite`]
//! - [`ReportWriter`]: [`TestSuite`] → JSON file

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod builder;
mod error;
mod suite;
mod writer;

pub use builder::{SuiteBuilder, DEFAULT_SEPARATOR};
pub use error::SuiteError;
pub use suite::{Step, TestCase, TestSuite};
pub use writer::ReportWriter;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
