//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that every Hyperion rule implements
//! - [`Category`] - The closed set of rule categories, in registry order
//! - [`Severity`] - Severity level for findings (Warning, Error)

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::finding::Finding;
use super::selection::ALL_SENTINEL;
use crate::document::Document;
use crate::error::HyperionError;

/// A Hyperion rule category.
///
/// Variants are declared in registry order, so the derived `Ord` is the
/// order findings are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Paths,
    Versioning,
    Naming,
    StatusCodes,
    Dates,
    TimeSeries,
    Keywords,
    DocumentStructure,
}

impl Category {
    /// Every category, in registry order.
    pub const ALL: [Category; 8] = [
        Category::Paths,
        Category::Versioning,
        Category::Naming,
        Category::StatusCodes,
        Category::Dates,
        Category::TimeSeries,
        Category::Keywords,
        Category::DocumentStructure,
    ];

    /// The stable name used on the command line and in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Paths => "paths",
            Category::Versioning => "versioning",
            Category::Naming => "naming",
            Category::StatusCodes => "status-codes",
            Category::Dates => "dates",
            Category::TimeSeries => "time-series",
            Category::Keywords => "keywords",
            Category::DocumentStructure => "document-structure",
        }
    }

    /// Comma-separated list of every accepted section name, `all` first.
    pub fn expected_names() -> String {
        std::iter::once(ALL_SENTINEL)
            .chain(Self::ALL.iter().map(|c| c.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = HyperionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| HyperionError::UnknownCategory {
                name: s.to_string(),
                expected: Self::expected_names(),
            })
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Severity level for findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Style issue that should be addressed.
    Warning,
    /// Violation of the standard.
    #[default]
    Error,
}

impl Severity {
    /// Short tag used at the start of a report line.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Warning => "WARN",
            Severity::Error => "ERR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A lint rule that checks one category of the Hyperion standard.
///
/// Implementations must not panic on a partial or malformed document,
/// must not mutate it and must not perform I/O. Findings are returned in
/// the order the rule's traversal discovers them.
pub trait LintRule: Send + Sync {
    /// The category this rule implements.
    fn category(&self) -> Category;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Check the document and return any findings.
    fn check(&self, doc: &Document) -> Vec<Finding>;
}
