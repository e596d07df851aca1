//! # Violations
//!
//! Soft validation findings. A violation means the document disagrees with
//! the schema; it is collected, never raised. Hard failures live in
//! [`dictcheck_core::ProcessingError`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A finding against a single document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaValidationError {
    /// Schema path of the offending key (`/` separated).
    pub path: String,
    /// Human-readable description.
    pub message: String,
}

impl SchemaValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A finding tagged with the index of the document it was found in.
///
/// Index 0 is the schema definition itself, so findings start at index 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentValidationError {
    /// Position of the document within its file.
    pub document_index: usize,
    /// Schema path of the offending key.
    pub path: String,
    /// Human-readable description.
    pub message: String,
}

impl DocumentValidationError {
    /// Tag a single-document finding with its document index.
    pub fn from_schema_error(document_index: usize, error: SchemaValidationError) -> Self {
        Self {
            document_index,
            path: error.path,
            message: error.message,
        }
    }
}

impl fmt::Display for DocumentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "document {} at {}: {}",
            self.document_index, self.path, self.message
        )
    }
}
