//! Date and time representation validation.
//!
//! The sanctioned representation for every date or time value is an
//! RFC 3339 string: `type: string` with `format: date-time`.

use chrono::DateTime;
use serde_yaml::Value;

use crate::document::walk::{schema_format, schema_type};
use crate::document::{Document, Location};
use crate::lint::conventions::is_date_like;
use crate::lint::{Category, Finding, LintRule};

/// The sanctioned `format` for date and time values.
pub const DATE_TIME_FORMAT: &str = "date-time";

/// Validates date/time fields use RFC 3339 `date-time` strings.
pub struct DatesRule;

impl DatesRule {
    /// Check a date-like field's declared type and format.
    fn check_representation(
        &self,
        name: &str,
        schema: &Value,
        location: &Location,
        findings: &mut Vec<Finding>,
    ) {
        if schema.get("$ref").is_some() {
            return;
        }
        match (schema_type(schema), schema_format(schema)) {
            (Some("string"), Some(DATE_TIME_FORMAT)) => {}
            (Some("string"), format) => findings.push(
                Finding::warning(
                    self.category(),
                    location.clone(),
                    format!(
                        "'{}' should declare format: date-time (found {})",
                        name,
                        format.map_or_else(|| "no format".to_string(), |f| format!("'{}'", f))
                    ),
                )
                .with_suggestion("Use type: string with format: date-time"),
            ),
            (Some(other), _) => findings.push(
                Finding::error(
                    self.category(),
                    location.clone(),
                    format!(
                        "'{}' is a date/time value and must be an RFC 3339 string, not '{}'",
                        name, other
                    ),
                )
                .with_suggestion("Use type: string with format: date-time"),
            ),
            (None, _) => {}
        }
    }

    /// Check `example` and `default` of a `date-time` schema parse as RFC 3339.
    fn check_samples(&self, schema: &Value, location: &Location, findings: &mut Vec<Finding>) {
        if schema_format(schema) != Some(DATE_TIME_FORMAT) {
            return;
        }
        for field in ["example", "default"] {
            let Some(sample) = schema.get(field) else {
                continue;
            };
            let valid = sample
                .as_str()
                .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok());
            if !valid {
                findings.push(Finding::error(
                    self.category(),
                    location.key(field),
                    format!(
                        "{} {} is not an RFC 3339 date-time",
                        field,
                        render_scalar(sample)
                    ),
                ));
            }
        }
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "value".to_string()),
    }
}

impl LintRule for DatesRule {
    fn category(&self) -> Category {
        Category::Dates
    }

    fn name(&self) -> &str {
        "Dates"
    }

    fn description(&self) -> &str {
        "Validates date/time values use RFC 3339 strings with format: date-time"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        for property in doc.properties() {
            if is_date_like(&property.name) {
                self.check_representation(
                    &property.name,
                    property.schema,
                    &property.location,
                    &mut findings,
                );
            }
            self.check_samples(property.schema, &property.location, &mut findings);
        }

        for parameter in doc.declared_parameters() {
            let (Some(name), Some(schema)) = (parameter.name(), parameter.schema()) else {
                continue;
            };
            let location = parameter.location.key("schema");
            if is_date_like(name) {
                self.check_representation(name, schema, &location, &mut findings);
            }
            self.check_samples(schema, &location, &mut findings);
        }

        findings
    }
}
