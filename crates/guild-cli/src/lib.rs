//! guild-cli library
//!
//! Argument definitions and command execution for the `guild` binary,
//! exported so they can be exercised without a terminal.

pub(crate) mod catalog_commands;
pub(crate) mod cli;
pub(crate) mod codec_commands;
pub(crate) mod commands;
pub(crate) mod directory_commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod register_commands;
pub(crate) mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
pub use logger::initialize as initialize_logger;
pub use runner::run;
