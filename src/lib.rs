//! hyperion-lint - Hyperion style linter for OpenAPI 3 documents.
//!
//! Checks an API description against the Hyperion style standard and
//! reports violations grouped by rule category. It is a convention linter,
//! not a schema validator: rules inspect a generic YAML/JSON tree and never
//! fail on malformed input.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`document`] - Document loading and defensive tree access
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rules, registry, engine and report formatters
//!
//! # Example
//!
//! ```
//! use hyperion_lint::document::Document;
//! use hyperion_lint::lint::{lint, Category, Selection, Severity};
//!
//! let doc = Document::parse("paths:\n  /some_path: {}\n").unwrap();
//! let findings = lint(&doc, &Selection::only([Category::Paths]));
//!
//! assert!(findings
//!     .iter()
//!     .any(|f| f.severity() == Severity::Error && f.location().to_string() == "paths./some_path"));
//! ```

pub mod cli;
pub mod document;
pub mod error;
pub mod lint;

pub use error::{HyperionError, Result};
