//! vv-cli library
//!
//! Command execution against a [`SessionContext`], kept separate from the
//! binary so it can be driven from tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod session_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::{Commands, RoleArg};
pub use error::{CliError, Result as CliResult};
pub use session_commands::{CommandOutcome, build_context, execute};
