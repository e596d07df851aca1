//! # Multi-Document YAML Loader
//!
//! Splits a YAML stream on `---` separators and converts every document
//! into a [`RawValue`]. Empty documents at the end of the stream (a
//! trailing separator) are dropped, so an input made only of separators
//! loads as zero documents. Empty documents between others are kept as
//! [`RawValue::Null`] so every document keeps its position in the file.

use std::path::{Path, PathBuf};

use dictcheck_core::RawValue;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading documents.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input is not well-formed YAML.
    #[error("failed to parse YAML document {index}: {source}")]
    YamlParse {
        /// Zero-based position of the document in the stream.
        index: usize,
        source: serde_yaml::Error,
    },
}

/// Load every document from an in-memory YAML stream.
///
/// # Errors
///
/// Returns [`LoaderError::YamlParse`] if any document is malformed.
pub fn load_documents_from_bytes(yaml: &[u8]) -> Result<Vec<RawValue>, LoaderError> {
    let mut documents = Vec::new();
    for (index, document) in serde_yaml::Deserializer::from_slice(yaml).enumerate() {
        let value = serde_yaml::Value::deserialize(document)
            .map_err(|source| LoaderError::YamlParse { index, source })?;
        documents.push(RawValue::from(value));
    }
    while matches!(documents.last(), Some(RawValue::Null)) {
        documents.pop();
        tracing::debug!(index = documents.len(), "dropped trailing empty YAML document");
    }
    tracing::debug!(documents = documents.len(), "loaded YAML stream");
    Ok(documents)
}

/// Load every document from a YAML file.
///
/// # Errors
///
/// Returns [`LoaderError::Io`] if the file cannot be read, or
/// [`LoaderError::YamlParse`] if any document is malformed.
pub fn load_documents_from_file(path: &Path) -> Result<Vec<RawValue>, LoaderError> {
    let content = std::fs::read(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "read YAML file");
    load_documents_from_bytes(&content)
}
