//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the strata binary.

mod commands;
mod fragment;
mod io;

pub use commands::Cli;
pub use fragment::handle_command;
