//! Identifier naming validation.
//!
//! - `operationId`: lowerCamelCase and unique
//! - path, query and cookie parameters: snake_case
//! - header parameters: `Hyphenated-Title-Case`
//! - schema properties: snake_case

use std::collections::HashMap;

use crate::document::{Document, Location};
use crate::lint::conventions::{
    is_header_case, is_lower_camel_case, is_snake_case, to_lower_camel_case, to_snake_case,
};
use crate::lint::{Category, Finding, LintRule};

/// Validates identifier naming conventions.
pub struct NamingRule;

impl NamingRule {
    fn check_operation_ids(&self, doc: &Document, findings: &mut Vec<Finding>) {
        let mut first_seen: HashMap<String, Location> = HashMap::new();

        for operation in doc.operations() {
            let Some(id) = operation.operation_id() else {
                continue;
            };
            let location = operation.location.key("operationId");

            if !is_lower_camel_case(id) {
                findings.push(
                    Finding::error(
                        self.category(),
                        location.clone(),
                        format!("operationId '{}' must be lowerCamelCase", id),
                    )
                    .with_suggestion(format!("Use \"{}\" instead", to_lower_camel_case(id))),
                );
            }

            match first_seen.get(id) {
                Some(original) => findings.push(Finding::error(
                    self.category(),
                    location,
                    format!(
                        "operationId '{}' is already used at {}",
                        id, original
                    ),
                )),
                None => {
                    first_seen.insert(id.to_string(), location);
                }
            }
        }
    }

    fn check_parameters(&self, doc: &Document, findings: &mut Vec<Finding>) {
        for parameter in doc.declared_parameters() {
            let Some(name) = parameter.name() else {
                continue;
            };
            let location = parameter.location.key("name");

            match parameter.placement() {
                Some("header") => {
                    if !is_header_case(name) {
                        findings.push(Finding::warning(
                            self.category(),
                            location,
                            format!(
                                "Header parameter '{}' should be Hyphenated-Title-Case",
                                name
                            ),
                        ));
                    }
                }
                Some(placement @ ("path" | "query" | "cookie")) => {
                    if !is_snake_case(name) {
                        findings.push(
                            Finding::error(
                                self.category(),
                                location,
                                format!(
                                    "{} parameter '{}' must be snake_case",
                                    placement, name
                                ),
                            )
                            .with_suggestion(format!("Use \"{}\" instead", to_snake_case(name))),
                        );
                    }
                }
                _ => {}
            }
        }
    }

    fn check_properties(&self, doc: &Document, findings: &mut Vec<Finding>) {
        for property in doc.properties() {
            if !is_snake_case(&property.name) {
                findings.push(
                    Finding::warning(
                        self.category(),
                        property.location,
                        format!("Property '{}' should be snake_case", property.name),
                    )
                    .with_suggestion(format!(
                        "Use \"{}\" instead",
                        to_snake_case(&property.name)
                    )),
                );
            }
        }
    }
}

impl LintRule for NamingRule {
    fn category(&self) -> Category {
        Category::Naming
    }

    fn name(&self) -> &str {
        "Naming"
    }

    fn description(&self) -> &str {
        "Validates casing of operation IDs, parameter names and schema properties"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();
        self.check_operation_ids(doc, &mut findings);
        self.check_parameters(doc, &mut findings);
        self.check_properties(doc, &mut findings);
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;

    fn check(source: &str) -> Vec<Finding> {
        NamingRule.check(&Document::parse(source).unwrap())
    }

    #[test]
    fn empty_document_has_no_findings() {
        assert!(check("{}").is_empty());
    }

    #[test]
    fn well_named_document_passes() {
        let findings = check(
            r#"
paths:
  /pets/{pet_id}:
    get:
      operationId: getPet
      parameters:
        - name: pet_id
          in: path
        - name: X-Request-Id
          in: header
components:
  schemas:
    Pet:
      properties:
        pet_name:
          type: string
"#,
        );

        assert!(findings.is_empty());
    }

    #[test]
    fn bad_operation_id_is_error_with_suggestion() {
        let findings = check("paths:\n  /pets:\n    get:\n      operationId: list_pets\n");

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity(), Severity::Error);
        assert_eq!(
            findings[0].location().to_string(),
            "paths./pets.get.operationId"
        );
        assert_eq!(findings[0].suggestion(), Some("Use \"listPets\" instead"));
    }

    #[test]
    fn duplicate_operation_id_is_error() {
        let findings = check(
            "paths:\n  /pets:\n    get:\n      operationId: listPets\n  /animals:\n    get:\n      operationId: listPets\n",
        );

        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].location().to_string(),
            "paths./animals.get.operationId"
        );
        assert!(findings[0].message().contains("paths./pets.get.operationId"));
    }

    #[test]
    fn camel_case_query_parameter_is_error() {
        let findings = check(
            "paths:\n  /pets:\n    get:\n      parameters:\n        - name: pageSize\n          in: query\n",
        );

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity(), Severity::Error);
        assert_eq!(
            findings[0].location().to_string(),
            "paths./pets.get.parameters[0].name"
        );
        assert_eq!(findings[0].suggestion(), Some("Use \"page_size\" instead"));
    }

    #[test]
    fn lowercase_header_is_warning() {
        let findings = check(
            "components:\n  parameters:\n    Trace:\n      name: x-trace-id\n      in: header\n",
        );

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity(), Severity::Warning);
    }

    #[test]
    fn camel_case_property_is_warning() {
        let findings = check(
            "components:\n  schemas:\n    Pet:\n      properties:\n        petName:\n          type: string\n",
        );

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity(), Severity::Warning);
        assert_eq!(
            findings[0].location().to_string(),
            "components.schemas.Pet.properties.petName"
        );
    }

    #[test]
    fn parameters_without_name_or_placement_are_skipped() {
        let findings = check(
            "paths:\n  /pets:\n    get:\n      parameters:\n        - in: query\n        - name: Weird\n        - 42\n",
        );

        assert!(findings.is_empty());
    }
}
