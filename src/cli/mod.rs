//! CLI module
//!
//! Command-line interface for the toolkit.
//!
//! # Commands
//!
//! - `scram-secrets` - List every SCRAM secret ARN attached to a cluster
//! - `generate` - Generate (or check) the service filter accessor file
//! - `services` - List the supported service names and their metadata

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
