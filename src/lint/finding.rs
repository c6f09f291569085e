//! Lint findings.
//!
//! This module provides the [`Finding`] type, the record of one style
//! violation. A finding is created once by the rule that detects it and
//! never changes afterwards.

use super::rule::{Category, Severity};
use crate::document::Location;

/// One violation of the Hyperion standard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    category: Category,
    severity: Severity,
    location: Location,
    message: String,
    suggestion: Option<String>,
}

impl Finding {
    /// Create a finding with the default (`Error`) severity.
    pub fn new(category: Category, location: Location, message: impl Into<String>) -> Self {
        Self {
            category,
            severity: Severity::default(),
            location,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Create an `Error` finding.
    pub fn error(category: Category, location: Location, message: impl Into<String>) -> Self {
        Self::new(category, location, message).with_severity(Severity::Error)
    }

    /// Create a `Warning` finding.
    pub fn warning(category: Category, location: Location, message: impl Into<String>) -> Self {
        Self::new(category, location, message).with_severity(Severity::Warning)
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Whether this finding has `Error` severity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
