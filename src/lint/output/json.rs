//! JSON output formatter.
//!
//! Formats lint findings as machine-readable JSON for tooling integration.

use super::{severity_counts, LintFormatter};
use crate::document::Location;
use crate::lint::{Category, Finding, Severity};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    findings: Vec<JsonFinding<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    category: Category,
    severity: Severity,
    location: &'a Location,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        findings: &[Finding],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let json_findings: Vec<_> = findings
            .iter()
            .map(|f| JsonFinding {
                category: f.category(),
                severity: f.severity(),
                location: f.location(),
                message: f.message(),
                suggestion: f.suggestion(),
            })
            .collect();

        let (errors, warnings) = severity_counts(findings);
        let output = JsonOutput {
            findings: json_findings,
            summary: JsonSummary {
                total: findings.len(),
                errors,
                warnings,
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
