//! API versioning validation.
//!
//! The API's major version lives in exactly one place in the URL: a
//! `v<N>` segment of the base server URL. `info.version` carries the full
//! `MAJOR.MINOR.PATCH` version and must agree with it.

use crate::document::access::key_string;
use crate::document::{Document, Location};
use crate::lint::conventions::{semver_major, version_segment};
use crate::lint::{Category, Finding, LintRule};

/// Validates version declaration conventions.
pub struct VersioningRule;

impl LintRule for VersioningRule {
    fn category(&self) -> Category {
        Category::Versioning
    }

    fn name(&self) -> &str {
        "Versioning"
    }

    fn description(&self) -> &str {
        "Validates the base URL carries the major version and agrees with info.version"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        let version_loc = Location::root().key("info").key("version");
        // Unquoted `1.0` or `2` parses as a number; judge its textual form.
        let info_major = match doc.lookup(&version_loc).and_then(key_string) {
            Some(version) => {
                let major = semver_major(&version);
                if major.is_none() {
                    findings.push(Finding::warning(
                        self.category(),
                        version_loc,
                        format!(
                            "info.version '{}' should use MAJOR.MINOR.PATCH format",
                            version
                        ),
                    ));
                }
                major
            }
            None => None,
        };

        let url_loc = Location::root().key("servers").index(0).key("url");
        if let Some(url) = doc.get_str(&url_loc) {
            match (version_segment(url), info_major) {
                (None, _) => findings.push(
                    Finding::warning(
                        self.category(),
                        url_loc,
                        format!(
                            "Base URL '{}' should carry the major API version as a 'v<N>' segment",
                            url
                        ),
                    )
                    .with_suggestion(format!(
                        "Use \"{}/v{}\" instead",
                        url.trim_end_matches('/'),
                        info_major.unwrap_or(1)
                    )),
                ),
                (Some(url_major), Some(info_major)) if url_major != info_major => {
                    findings.push(Finding::error(
                        self.category(),
                        url_loc,
                        format!(
                            "Base URL version v{} does not match info.version major version {}",
                            url_major, info_major
                        ),
                    ))
                }
                _ => {}
            }
        }

        let paths_loc = Location::root().key("paths");
        if let Some(paths) = doc.get_mapping(&paths_loc) {
            for (path, _) in crate::document::access::entries(paths) {
                if let Some(major) = version_segment(&path) {
                    findings.push(Finding::error(
                        self.category(),
                        paths_loc.key(path.as_str()),
                        format!(
                            "Path '{}' carries version v{}; the version belongs in the base URL only",
                            path, major
                        ),
                    ));
                }
            }
        }

        findings
    }
}
