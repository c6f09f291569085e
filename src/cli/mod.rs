//! Command-line interface for hyperion-lint.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the command implementation.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, FailOn};
pub use commands::{Command, CommandResult, LintCommand, LintSettings};
