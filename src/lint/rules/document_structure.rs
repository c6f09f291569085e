//! Document structure validation.
//!
//! Checks the overall shape of the document: the required top-level
//! sections, no unexpected top-level keys, JSON responses wrapped in an
//! object and no deeply nested payloads.

use crate::document::access::{entries, key_string};
use crate::document::walk::{resolve_ref, schema_type, BodyKind};
use crate::document::{Document, Location};
use crate::lint::{Category, Finding, LintRule};

/// Top-level fields defined by OpenAPI 3.
pub const KNOWN_TOP_LEVEL: [&str; 10] = [
    "openapi",
    "info",
    "jsonSchemaDialect",
    "servers",
    "paths",
    "webhooks",
    "components",
    "security",
    "tags",
    "externalDocs",
];

/// Deepest allowed object nesting inside a schema.
pub const MAX_NESTING: usize = 4;

/// Validates overall document shape.
pub struct DocumentStructureRule;

fn is_json_media(media_type: &str) -> bool {
    let essence = media_type.split(';').next().unwrap_or_default().trim();
    essence == "application/json" || essence.ends_with("+json")
}

impl DocumentStructureRule {
    fn check_openapi(&self, doc: &Document, findings: &mut Vec<Finding>) {
        let location = Location::root().key("openapi");
        let Some(value) = doc.lookup(&location) else {
            findings.push(Finding::error(
                self.category(),
                Location::root(),
                "openapi doesn't exist",
            ));
            return;
        };
        let version = key_string(value).unwrap_or_default();
        if !version.starts_with("3.") {
            findings.push(Finding::error(
                self.category(),
                location,
                format!("openapi version '{}' is not an OpenAPI 3.x version", version),
            ));
        }
    }

    fn check_info(&self, doc: &Document, findings: &mut Vec<Finding>) {
        let location = Location::root().key("info");
        if !doc.has_path(&location) {
            findings.push(Finding::error(
                self.category(),
                Location::root(),
                "info doesn't exist",
            ));
            return;
        }
        if doc.get_mapping(&location).is_none() {
            findings.push(Finding::error(
                self.category(),
                location,
                "info must be a mapping",
            ));
            return;
        }
        for field in ["title", "version"] {
            if !doc.has_path(&location.key(field)) {
                findings.push(Finding::error(
                    self.category(),
                    location.clone(),
                    format!("info.{} doesn't exist", field),
                ));
            }
        }
    }

    fn check_paths(&self, doc: &Document, findings: &mut Vec<Finding>) {
        let location = Location::root().key("paths");
        if !doc.has_path(&location) {
            findings.push(Finding::error(
                self.category(),
                Location::root(),
                "paths doesn't exist",
            ));
        } else if doc.get_mapping(&location).is_none() {
            findings.push(Finding::error(
                self.category(),
                location,
                "paths must be a mapping of path to path item",
            ));
        }
    }

    fn check_top_level_keys(&self, doc: &Document, findings: &mut Vec<Finding>) {
        let Some(top) = doc.root().as_mapping() else {
            return;
        };
        for (key, _) in entries(top) {
            if key.starts_with("x-") || KNOWN_TOP_LEVEL.contains(&key.as_str()) {
                continue;
            }
            findings.push(Finding::warning(
                self.category(),
                Location::root().key(key.as_str()),
                format!("Unexpected top-level key '{}'", key),
            ));
        }
    }

    fn check_response_envelopes(&self, doc: &Document, findings: &mut Vec<Finding>) {
        for body in doc.body_schemas() {
            if body.kind != BodyKind::Response || !is_json_media(&body.media_type) {
                continue;
            }
            let schema = resolve_ref(doc.root(), body.schema);
            let kind = match schema_type(schema) {
                Some(kind) => kind,
                None if schema.get("items").is_some() => "array",
                None => continue,
            };
            if kind != "object" {
                findings.push(
                    Finding::error(
                        self.category(),
                        body.location,
                        format!(
                            "Top-level JSON response must be an object, not '{}'",
                            kind
                        ),
                    )
                    .with_suggestion("Wrap the payload in an object, e.g. {\"items\": [...]}"),
                );
            }
        }
    }

    fn check_nesting(&self, doc: &Document, findings: &mut Vec<Finding>) {
        for property in doc.properties() {
            if property.depth == MAX_NESTING + 1 {
                findings.push(Finding::warning(
                    self.category(),
                    property.location,
                    format!(
                        "Property '{}' is nested {} levels deep (maximum {})",
                        property.name, property.depth, MAX_NESTING
                    ),
                ));
            }
        }
    }
}

impl LintRule for DocumentStructureRule {
    fn category(&self) -> Category {
        Category::DocumentStructure
    }

    fn name(&self) -> &str {
        "Document Structure"
    }

    fn description(&self) -> &str {
        "Validates required top-level sections, JSON response envelopes and nesting depth"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();
        self.check_openapi(doc, &mut findings);
        self.check_info(doc, &mut findings);
        self.check_paths(doc, &mut findings);
        self.check_top_level_keys(doc, &mut findings);
        self.check_response_envelopes(doc, &mut findings);
        self.check_nesting(doc, &mut findings);
        findings
    }
}
