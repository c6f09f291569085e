//! Human-readable output formatter.
//!
//! Formats lint findings for terminal display with optional color support.
//! Each finding is a single line:
//!
//! ```text
//! ERR Section: paths   Path: servers[0].url:  Server URL contains '_'
//! ```

use console::Style;

use super::{severity_counts, LintFormatter};
use crate::lint::{Finding, Severity};
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
    /// Whether to print suggestions and a summary after the findings.
    pub details: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            details: false,
        }
    }

    /// Print suggestions under each finding and a closing summary line.
    pub fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    fn tag_style(&self, severity: Severity) -> Style {
        if !self.use_color {
            return Style::new();
        }
        match severity {
            Severity::Error => Style::new().red().bold(),
            Severity::Warning => Style::new().color256(208),
        }
    }

    fn help_style(&self) -> Style {
        if self.use_color {
            Style::new().magenta().dim()
        } else {
            Style::new()
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        findings: &[Finding],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for finding in findings {
            writeln!(
                writer,
                "{} Section: {}   Path: {}:  {}",
                self.tag_style(finding.severity())
                    .apply_to(finding.severity().tag()),
                finding.category(),
                finding.location(),
                finding.message()
            )?;

            if self.details {
                if let Some(suggestion) = finding.suggestion() {
                    writeln!(
                        writer,
                        "    {}",
                        self.help_style().apply_to(format!("= help: {}", suggestion))
                    )?;
                }
            }
        }

        if self.details {
            let (errors, warnings) = severity_counts(findings);
            if findings.is_empty() {
                writeln!(writer, "No issues found")?;
            } else {
                writeln!(
                    writer,
                    "Found {} error(s) and {} warning(s)",
                    errors, warnings
                )?;
            }
        }

        Ok(())
    }
}
