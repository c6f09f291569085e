//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub, VS Code, and other tools.
//!
//! Each finding becomes one result. The rule id is the finding's category
//! and the finding's location is reported as a logical location, since a
//! key path has no line or column.

use super::LintFormatter;
use crate::lint::{Category, Finding, RuleRegistry, Severity};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::{Path, PathBuf};

/// SARIF version we generate.
const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Formats lint output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
    /// The linted document, reported as the artifact of every result.
    pub artifact: Option<PathBuf>,
    /// Rule name and description per category.
    pub rules: BTreeMap<Category, (String, String)>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    short_description: SarifMessage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    physical_location: Option<SarifPhysicalLocation>,
    logical_locations: Vec<SarifLogicalLocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLogicalLocation {
    fully_qualified_name: String,
}

impl SarifFormatter {
    /// Create a new SARIF formatter.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            artifact: None,
            rules: BTreeMap::new(),
        }
    }

    /// Describe each reported category with its rule's name and description.
    pub fn with_registry(mut self, registry: &RuleRegistry) -> Self {
        self.rules = registry
            .iter()
            .map(|rule| {
                (
                    rule.category(),
                    (rule.name().to_string(), rule.description().to_string()),
                )
            })
            .collect();
        self
    }

    /// Report results against the given document file.
    pub fn with_artifact(mut self, path: Option<&Path>) -> Self {
        self.artifact = path.map(Path::to_path_buf);
        self
    }

    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    fn physical_location(&self) -> Option<SarifPhysicalLocation> {
        self.artifact.as_ref().map(|path| SarifPhysicalLocation {
            artifact_location: SarifArtifactLocation {
                uri: path.display().to_string(),
            },
        })
    }
}

impl LintFormatter for SarifFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        findings: &[Finding],
        writer: &mut W,
    ) -> std::io::Result<()> {
        // Unique categories, in registry order
        let categories: BTreeSet<Category> = findings.iter().map(|f| f.category()).collect();

        let rules: Vec<_> = categories
            .iter()
            .map(|category| match self.rules.get(category) {
                Some((name, description)) => SarifRule {
                    id: category.to_string(),
                    name: Some(name.clone()),
                    short_description: SarifMessage {
                        text: description.clone(),
                    },
                },
                None => SarifRule {
                    id: category.to_string(),
                    name: None,
                    short_description: SarifMessage {
                        text: format!("Hyperion {} rules", category),
                    },
                },
            })
            .collect();

        let results: Vec<_> = findings
            .iter()
            .map(|f| SarifResult {
                rule_id: f.category().to_string(),
                level: Self::severity_to_level(f.severity()),
                message: SarifMessage {
                    text: f.message().to_string(),
                },
                locations: vec![SarifLocation {
                    physical_location: self.physical_location(),
                    logical_locations: vec![SarifLogicalLocation {
                        fully_qualified_name: f.location().to_string(),
                    }],
                }],
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules,
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(&mut *writer, &log).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
