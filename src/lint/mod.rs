//! Hyperion style linting.
//!
//! This module provides the rule-based linting engine.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - One validation check per [`Category`] ([`LintRule`] trait)
//! - **Registry** - The built-in rules in reporting order ([`RuleRegistry`])
//! - **Engine** - Runs a [`Selection`] of rules over a document ([`LintEngine`])
//! - **Findings** - Violations with severity and location ([`Finding`])
//!
//! # Example
//!
//! ```
//! use hyperion_lint::document::Document;
//! use hyperion_lint::lint::{lint, Category, Selection, Severity};
//!
//! let doc = Document::parse("servers:\n  - url: https://api.example.com/v1\n").unwrap();
//! let findings = lint(&doc, &Selection::only([Category::Paths]));
//! assert!(findings.is_empty());
//!
//! // Severity has ordering
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod conventions;
pub mod engine;
pub mod finding;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod selection;

pub use engine::{lint, LintEngine};
pub use finding::Finding;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter};
pub use registry::RuleRegistry;
pub use rule::{Category, LintRule, Severity};
pub use rules::{
    DatesRule, DocumentStructureRule, KeywordsRule, NamingRule, PathsRule, StatusCodesRule,
    TimeSeriesRule, VersioningRule,
};
pub use selection::Selection;
