//! Lint output formatters.
//!
//! This module provides formatters for outputting lint findings
//! in different formats (human-readable, JSON, SARIF).

pub mod human;
pub mod json;
pub mod sarif;

use crate::lint::{Finding, Severity};
use std::io::Write;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per finding
    #[default]
    Human,
    /// Machine-readable JSON
    Json,
    /// SARIF 2.1.0 for code scanning tools
    Sarif,
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format findings to the given writer.
    fn format<W: Write + ?Sized>(
        &self,
        findings: &[Finding],
        writer: &mut W,
    ) -> std::io::Result<()>;
}

/// Count of findings by severity, as `(errors, warnings)`.
pub(crate) fn severity_counts(findings: &[Finding]) -> (usize, usize) {
    let errors = findings
        .iter()
        .filter(|f| f.severity() == Severity::Error)
        .count();
    (errors, findings.len() - errors)
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
