//! Reserved keyword validation.
//!
//! Hyperion reserves a handful of field names with a fixed meaning. They
//! must be spelled exactly, typed as the standard says and never replaced
//! by a home-grown synonym.

use serde_yaml::Value;

use crate::document::walk::schema_type;
use crate::document::{Document, Location};
use crate::lint::conventions::to_snake_case;
use crate::lint::{Category, Finding, LintRule};

/// Field names reserved by the standard.
pub const RESERVED_KEYWORDS: [&str; 6] = [
    "id",
    "created_at",
    "updated_at",
    "limit",
    "offset",
    "cursor",
];

/// Reserved keywords that identify or timestamp a resource and are
/// assigned by the server.
const SERVER_ASSIGNED: [&str; 3] = ["id", "created_at", "updated_at"];

/// Common synonyms and the reserved keyword to use instead.
const SYNONYMS: [(&str, &str); 14] = [
    ("created", "created_at"),
    ("creation_date", "created_at"),
    ("create_time", "created_at"),
    ("date_created", "created_at"),
    ("updated", "updated_at"),
    ("modified", "updated_at"),
    ("modified_at", "updated_at"),
    ("last_modified", "updated_at"),
    ("update_time", "updated_at"),
    ("page_size", "limit"),
    ("per_page", "limit"),
    ("max_results", "limit"),
    ("skip", "offset"),
    ("page_token", "cursor"),
];

/// The reserved keyword `name` is a near miss for, if any.
fn near_miss(name: &str) -> Option<&'static str> {
    if RESERVED_KEYWORDS.contains(&name) {
        return None;
    }
    let normalized = to_snake_case(name);
    RESERVED_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| *keyword == normalized)
        .or_else(|| {
            SYNONYMS
                .iter()
                .find(|(synonym, _)| *synonym == normalized)
                .map(|(_, keyword)| *keyword)
        })
}

/// Validates usage of reserved keyword fields.
pub struct KeywordsRule;

impl KeywordsRule {
    fn check_spelling(&self, name: &str, location: &Location, findings: &mut Vec<Finding>) {
        if let Some(keyword) = near_miss(name) {
            findings.push(
                Finding::error(
                    self.category(),
                    location.clone(),
                    format!("'{}' must use the reserved keyword '{}'", name, keyword),
                )
                .with_suggestion(format!("Use \"{}\" instead", keyword)),
            );
        }
    }

    fn check_property(
        &self,
        name: &str,
        schema: &Value,
        location: &Location,
        findings: &mut Vec<Finding>,
    ) {
        if name == "id" {
            if let Some(kind) = schema_type(schema).filter(|t| *t != "string") {
                findings.push(Finding::error(
                    self.category(),
                    location.clone(),
                    format!("Reserved keyword 'id' must be a string, not '{}'", kind),
                ));
            }
        }
        if SERVER_ASSIGNED.contains(&name)
            && schema.get("$ref").is_none()
            && schema.get("readOnly").and_then(Value::as_bool) != Some(true)
        {
            findings.push(
                Finding::warning(
                    self.category(),
                    location.clone(),
                    format!("Reserved keyword '{}' should be readOnly", name),
                )
                .with_suggestion("Add readOnly: true"),
            );
        }
    }

    fn check_parameter(
        &self,
        name: &str,
        schema: Option<&Value>,
        location: &Location,
        findings: &mut Vec<Finding>,
    ) {
        if !matches!(name, "limit" | "offset") {
            return;
        }
        if let Some(kind) = schema
            .and_then(schema_type)
            .filter(|t| *t != "integer")
        {
            findings.push(Finding::error(
                self.category(),
                location.key("schema"),
                format!(
                    "Reserved keyword '{}' must be an integer, not '{}'",
                    name, kind
                ),
            ));
        }
    }
}

impl LintRule for KeywordsRule {
    fn category(&self) -> Category {
        Category::Keywords
    }

    fn name(&self) -> &str {
        "Keywords"
    }

    fn description(&self) -> &str {
        "Validates reserved keyword fields are spelled and typed as the standard defines"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        for property in doc.properties() {
            self.check_spelling(&property.name, &property.location, &mut findings);
            self.check_property(
                &property.name,
                property.schema,
                &property.location,
                &mut findings,
            );
        }

        for parameter in doc.declared_parameters() {
            let Some(name) = parameter.name() else {
                continue;
            };
            let name_loc = parameter.location.key("name");
            self.check_spelling(name, &name_loc, &mut findings);
            self.check_parameter(name, parameter.schema(), &parameter.location, &mut findings);
        }

        findings
    }
}
