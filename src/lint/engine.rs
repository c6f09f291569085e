//! The lint engine.
//!
//! [`LintEngine`] runs one linting pass: resolve the selection through the
//! registry, run each rule in registry order and concatenate the findings.
//! A rule that panics is contained and reported as a single finding so one
//! broken rule cannot abort the whole pass.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::finding::Finding;
use super::registry::RuleRegistry;
use super::rule::LintRule;
use super::selection::Selection;
use crate::document::{Document, Location};

/// Orchestrates a linting pass over a document.
pub struct LintEngine {
    registry: RuleRegistry,
}

impl LintEngine {
    /// Create an engine over a custom registry.
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Create an engine with every built-in rule.
    pub fn with_builtins() -> Self {
        Self::new(RuleRegistry::with_builtins())
    }

    /// The registry this engine resolves selections against.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Lint `doc` with the rules named by `selection`.
    ///
    /// Findings are ordered by registry order across rules and by each
    /// rule's own emission order within it.
    pub fn lint(&self, doc: &Document, selection: &Selection) -> Vec<Finding> {
        let mut findings = Vec::new();
        for rule in self.registry.resolve(selection) {
            let found = run_rule(rule, doc);
            tracing::debug!(
                "Rule '{}' produced {} finding(s)",
                rule.category(),
                found.len()
            );
            findings.extend(found);
        }
        tracing::info!("Linting produced {} finding(s)", findings.len());
        findings
    }
}

impl Default for LintEngine {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Lint `doc` with the built-in rules.
pub fn lint(doc: &Document, selection: &Selection) -> Vec<Finding> {
    LintEngine::with_builtins().lint(doc, selection)
}

fn run_rule(rule: &dyn LintRule, doc: &Document) -> Vec<Finding> {
    match panic::catch_unwind(AssertUnwindSafe(|| rule.check(doc))) {
        Ok(findings) => findings,
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            tracing::error!("Rule '{}' panicked: {}", rule.category(), reason);
            vec![Finding::error(
                rule.category(),
                Location::root(),
                format!(
                    "internal error: rule '{}' failed unexpectedly: {}",
                    rule.category(),
                    reason
                ),
            )]
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
