//! HTTP status code validation.
//!
//! Only a fixed set of status codes is sanctioned by the standard. Every
//! other code declared under an operation's `responses` is reported.

use crate::document::access::entries;
use crate::document::Document;
use crate::lint::{Category, Finding, LintRule};

/// Status codes operations may declare.
pub const ALLOWED_STATUS_CODES: [u16; 22] = [
    200, 201, 202, 204, // success
    301, 303, 304, 307, 308, // redirection
    400, 401, 403, 404, 405, 409, 413, 422, 429, // client errors
    500, 502, 503, 504, // server errors
];

/// Validates declared response status codes.
pub struct StatusCodesRule;

fn is_allowed(code: &str) -> bool {
    code.parse::<u16>()
        .map(|code| ALLOWED_STATUS_CODES.contains(&code))
        .unwrap_or(false)
}

impl LintRule for StatusCodesRule {
    fn category(&self) -> Category {
        Category::StatusCodes
    }

    fn name(&self) -> &str {
        "Status Codes"
    }

    fn description(&self) -> &str {
        "Validates every declared response status code is in the sanctioned set"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        for operation in doc.operations() {
            let Some(responses) = operation.responses() else {
                continue;
            };
            let responses_loc = operation.location.key("responses");
            for (code, _) in entries(responses) {
                if code == "default" || is_allowed(&code) {
                    continue;
                }
                findings.push(Finding::error(
                    self.category(),
                    responses_loc.key(code.as_str()),
                    format!(
                        "Status code {} is not allowed for {} {}",
                        code,
                        operation.method.to_uppercase(),
                        operation.path
                    ),
                ));
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;

    fn check(source: &str) -> Vec<Finding> {
        StatusCodesRule.check(&Document::parse(source).unwrap())
    }

    #[test]
    fn empty_document_has_no_findings() {
        assert!(check("{}").is_empty());
    }

    #[test]
    fn allowed_codes_pass() {
        let findings = check(
            r#"
paths:
  /pets:
    get:
      responses:
        200: {description: ok}
        "404": {description: missing}
        default: {description: error}
"#,
        );

        assert!(findings.is_empty());
    }

    #[test]
    fn teapot_is_single_error() {
        let findings = check(
            "paths:\n  /tea:\n    post:\n      responses:\n        201: {description: ok}\n        418: {description: teapot}\n",
        );

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity(), Severity::Error);
        assert!(findings[0].message().contains("418"));
        assert_eq!(
            findings[0].location().to_string(),
            "paths./tea.post.responses.418"
        );
    }

    #[test]
    fn range_codes_are_not_allowed() {
        let findings = check("paths:\n  /pets:\n    get:\n      responses:\n        2XX: {}\n");

        assert_eq!(findings.len(), 1);
        assert!(findings[0].message().contains("2XX"));
    }

    #[test]
    fn findings_follow_declaration_order() {
        let findings = check(
            "paths:\n  /a:\n    get:\n      responses:\n        302: {}\n        200: {}\n        418: {}\n",
        );
        let codes: Vec<String> = findings.iter().map(|f| f.location().to_string()).collect();

        assert_eq!(
            codes,
            vec!["paths./a.get.responses.302", "paths./a.get.responses.418"]
        );
    }

    #[test]
    fn malformed_responses_are_tolerated() {
        assert!(check("paths:\n  /a:\n    get:\n      responses: [200, 418]\n").is_empty());
    }

    #[test]
    fn allowed_set_has_expected_size() {
        assert_eq!(ALLOWED_STATUS_CODES.len(), 22);
        assert!(!ALLOWED_STATUS_CODES.contains(&302));
    }
}
