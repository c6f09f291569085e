//! Parsed specification documents.
//!
//! A [`Document`] wraps the generic YAML/JSON tree produced by the loader.
//! Rules never touch the tree directly; they go through the defensive
//! lookups in [`access`] and the OpenAPI walkers in [`walk`], so a missing
//! or oddly-shaped field is always data, never a crash.
//!
//! # Example
//!
//! ```
//! use hyperion_lint::document::{Document, Location};
//!
//! let doc = Document::parse("servers:\n  - url: api/v1\n").unwrap();
//! let url = Location::root().key("servers").index(0).key("url");
//!
//! assert_eq!(doc.get_str(&url), Some("api/v1"));
//! assert!(!doc.has_path(&Location::root().key("paths")));
//! ```

pub mod access;
pub mod loader;
pub mod location;
pub mod walk;

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

pub use loader::load_document;
pub use location::{Location, Segment, ROOT_SENTINEL};

use crate::error::{HyperionError, Result};

/// A parsed specification document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Value,
    source: Option<PathBuf>,
}

impl Document {
    /// Wrap an already-parsed tree.
    pub fn new(root: Value) -> Self {
        Self { root, source: None }
    }

    /// Parse a YAML or JSON document held in memory.
    pub fn parse(content: &str) -> Result<Self> {
        parse_value(content, Path::new("<memory>")).map(Self::new)
    }

    /// Record the file this document was read from.
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The underlying tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The file this document was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Whether every step along `path` exists.
    pub fn has_path(&self, path: &Location) -> bool {
        access::has_path(&self.root, path)
    }

    /// The value at `path`, or `default` when absent.
    pub fn get<'a>(&'a self, path: &Location, default: &'a Value) -> &'a Value {
        access::get(&self.root, path, default)
    }

    /// The value at `path`, if present.
    pub fn lookup(&self, path: &Location) -> Option<&Value> {
        access::lookup(&self.root, path)
    }

    /// The string at `path`, if present and a string.
    pub fn get_str(&self, path: &Location) -> Option<&str> {
        access::get_str(&self.root, path)
    }

    /// The mapping at `path`, if present and a mapping.
    pub fn get_mapping(&self, path: &Location) -> Option<&Mapping> {
        access::get_mapping(&self.root, path)
    }

    /// The sequence at `path`, if present and a sequence.
    pub fn get_sequence(&self, path: &Location) -> Option<&Vec<Value>> {
        access::get_sequence(&self.root, path)
    }

    /// Every operation under `paths`.
    pub fn operations(&self) -> Vec<walk::Operation<'_>> {
        walk::operations(&self.root)
    }

    /// Every inline parameter declaration.
    pub fn declared_parameters(&self) -> Vec<walk::Parameter<'_>> {
        walk::declared_parameters(&self.root)
    }

    /// Every request and response body schema.
    pub fn body_schemas(&self) -> Vec<walk::BodySchema<'_>> {
        walk::body_schemas(&self.root)
    }

    /// Every named schema property.
    pub fn properties(&self) -> Vec<walk::Property<'_>> {
        walk::properties(&self.root)
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

/// Parse text into a generic tree, attributing failures to `source_path`.
pub(crate) fn parse_value(content: &str, source_path: &Path) -> Result<Value> {
    serde_yaml::from_str(content).map_err(|e| HyperionError::DocumentParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
