//! Tooling & Integration Layer
//!
//! The `roster` command-line front end and its text/JSON output formatters.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
