//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] is the single source of truth mapping each
//! [`Category`] to its rule. Rules are kept keyed by category, so iteration
//! and resolution always follow registry order.

use std::collections::BTreeMap;

use super::rule::{Category, LintRule};
use super::rules::{
    DatesRule, DocumentStructureRule, KeywordsRule, NamingRule, PathsRule, StatusCodesRule,
    TimeSeriesRule, VersioningRule,
};
use super::selection::Selection;

/// Registry of the available lint rules.
pub struct RuleRegistry {
    rules: BTreeMap<Category, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry with the built-in rule for every category.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for category in Category::ALL {
            registry.register(builtin(category));
        }
        registry
    }

    /// Register a lint rule, replacing any rule already in its category.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.category(), rule);
    }

    /// Get the rule for a category.
    pub fn get(&self, category: Category) -> Option<&dyn LintRule> {
        self.rules.get(&category).map(|r| r.as_ref())
    }

    /// Iterate over all rules in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// The selected rules, in registry order regardless of how the
    /// selection was written.
    pub fn resolve(&self, selection: &Selection) -> Vec<&dyn LintRule> {
        self.rules
            .iter()
            .filter(|(category, _)| selection.contains(**category))
            .map(|(_, rule)| rule.as_ref())
            .collect()
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in rule implementing `category`.
fn builtin(category: Category) -> Box<dyn LintRule> {
    match category {
        Category::Paths => Box::new(PathsRule),
        Category::Versioning => Box::new(VersioningRule),
        Category::Naming => Box::new(NamingRule),
        Category::StatusCodes => Box::new(StatusCodesRule),
        Category::Dates => Box::new(DatesRule),
        Category::TimeSeries => Box::new(TimeSeriesRule),
        Category::Keywords => Box::new(KeywordsRule),
        Category::DocumentStructure => Box::new(DocumentStructureRule),
    }
}
