//! Document loading.
//!
//! Reads a specification file from disk and parses it into a
//! [`Document`]. YAML is a superset of JSON, so both formats go through
//! the same parser.

use std::fs;
use std::path::Path;

use super::{parse_value, Document};
use crate::error::{HyperionError, Result};

/// Load a specification document from `path`.
///
/// # Errors
///
/// Returns `DocumentNotFound` if the file does not exist, `Io` if it cannot
/// be read and `DocumentParseError` if it is not valid YAML/JSON.
pub fn load_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HyperionError::DocumentNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HyperionError::Io(e)
        }
    })?;

    tracing::debug!("Loaded {} bytes from {}", content.len(), path.display());

    let root = parse_value(&content, path)?;
    Ok(Document::new(root).with_source(path))
}
