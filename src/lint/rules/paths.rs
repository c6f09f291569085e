//! Path convention validation.
//!
//! This rule validates the base server URL and every path key: relative
//! base URL, `-` as the word separator and lowercase spelling.

use crate::document::{Document, Location};
use crate::lint::conventions::{is_lowercase, strip_templates, uses_underscore};
use crate::lint::{Category, Finding, LintRule};

/// Validates the base URL and path keys.
pub struct PathsRule;

impl PathsRule {
    fn check_server_url(&self, doc: &Document, findings: &mut Vec<Finding>) {
        let location = Location::root().key("servers").index(0).key("url");
        let Some(url) = doc.get_str(&location) else {
            findings.push(Finding::error(
                self.category(),
                Location::root(),
                "servers[0].url doesn't exist",
            ));
            return;
        };

        if url.starts_with('/') {
            findings.push(
                Finding::error(
                    self.category(),
                    location.clone(),
                    format!("Base URL '{}' must be relative (no leading '/')", url),
                )
                .with_suggestion(format!("Use \"{}\" instead", url.trim_start_matches('/'))),
            );
        }
        if uses_underscore(url) {
            findings.push(
                Finding::error(
                    self.category(),
                    location.clone(),
                    format!(
                        "Base URL '{}' must use '-' instead of '_' as a word separator",
                        url
                    ),
                )
                .with_suggestion(format!("Use \"{}\" instead", url.replace('_', "-"))),
            );
        }
        if !is_lowercase(url) {
            findings.push(
                Finding::warning(
                    self.category(),
                    location,
                    format!("Base URL '{}' should be all lowercase", url),
                )
                .with_suggestion(format!("Use \"{}\" instead", url.to_lowercase())),
            );
        }
    }

    fn check_path_keys(&self, doc: &Document, findings: &mut Vec<Finding>) {
        let paths_loc = Location::root().key("paths");
        let Some(paths) = doc.get_mapping(&paths_loc) else {
            return;
        };

        for (path, _) in crate::document::access::entries(paths) {
            let location = paths_loc.key(path.as_str());
            let literal = strip_templates(&path);

            if uses_underscore(&literal) {
                findings.push(Finding::error(
                    self.category(),
                    location.clone(),
                    format!(
                        "Path '{}' must use '-' instead of '_' as a word separator",
                        path
                    ),
                ));
            }
            if !is_lowercase(&literal) {
                findings.push(Finding::warning(
                    self.category(),
                    location,
                    format!("Path '{}' should be all lowercase", path),
                ));
            }
        }
    }
}

impl LintRule for PathsRule {
    fn category(&self) -> Category {
        Category::Paths
    }

    fn name(&self) -> &str {
        "Paths"
    }

    fn description(&self) -> &str {
        "Validates the base server URL and path keys: relative, hyphen-separated, lowercase"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();
        self.check_server_url(doc, &mut findings);
        self.check_path_keys(doc, &mut findings);
        findings
    }
}
