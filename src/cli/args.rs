//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::builder::PossibleValuesParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::lint::selection::ALL_SENTINEL;
use crate::lint::{Category, Finding, OutputFormat, Severity};

/// hyperion-lint - Hyperion style linter for OpenAPI 3 documents.
#[derive(Debug, Parser)]
#[command(name = "hyperion-lint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// OpenAPI document to lint (YAML or JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Lint sections to run (repeatable, comma-separated)
    #[arg(
        short,
        long,
        value_name = "SECTION",
        value_delimiter = ',',
        value_parser = section_parser(),
        default_value = ALL_SENTINEL
    )]
    pub section: Vec<String>,

    /// Output format
    #[arg(long, value_enum, env = "HYPERION_FORMAT", default_value = "human")]
    pub format: OutputFormat,

    /// Exit with status 1 when findings at or above this severity are reported
    #[arg(long, value_enum, env = "HYPERION_FAIL_ON", default_value = "never")]
    pub fail_on: FailOn,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show suggestions and a summary
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Accepted `--section` values: `all` followed by every category.
fn section_parser() -> PossibleValuesParser {
    PossibleValuesParser::new(
        std::iter::once(ALL_SENTINEL).chain(Category::ALL.iter().map(|c| c.as_str())),
    )
}

/// Severity threshold that turns findings into a failing exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Findings never change the exit status
    #[default]
    Never,
    /// Fail when any error is reported
    Error,
    /// Fail when any error or warning is reported
    Warning,
}

impl FailOn {
    /// Whether `findings` meet this threshold.
    pub fn is_met(self, findings: &[Finding]) -> bool {
        match self {
            FailOn::Never => false,
            FailOn::Error => findings.iter().any(|f| f.severity() == Severity::Error),
            FailOn::Warning => !findings.is_empty(),
        }
    }
}
