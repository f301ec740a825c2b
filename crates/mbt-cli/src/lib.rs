//! MBT command-line front end
//!
//! Wires graph decoding, sequence generation, suite materialization and
//! report writing behind the `mbt` binary.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod cli;
mod commands;
mod logging;
mod settings;

pub use cli::build_cli;
pub use commands::run;
pub use logging::init_logging;
pub use settings::{LogFormat, LogSettings, Settings};
