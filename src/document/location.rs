//! Document locations.
//!
//! A [`Location`] is a path-like locator into a parsed document. The same
//! type is used as the key path for lookups and as the place a finding
//! points at when it is reported.

use std::fmt;

use serde::{Serialize, Serializer};

/// Text rendered for the document root.
pub const ROOT_SENTINEL: &str = "(root)";

/// One step of a [`Location`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A mapping key.
    Key(String),
    /// A sequence index.
    Index(usize),
}

/// A path into the document tree, e.g. `servers[0].url` or `paths./foo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    segments: Vec<Segment>,
}

impl Location {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend this location with a mapping key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Key(key.into()));
        next
    }

    /// Extend this location with a sequence index.
    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Index(index));
        next
    }

    /// Whether this location is the document root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments making up this location.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(ROOT_SENTINEL);
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{}", key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
