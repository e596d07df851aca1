//! # Error Types — Hard Failure Taxonomy
//!
//! Defines the hard (fatal) error types used throughout dictcheck. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Hard errors mean the schema or the document is malformed. They abort
//!   the current validation and are never folded into the violation list.
//! - Soft findings ("key not found", "value not accepted") are plain data
//!   records owned by `dictcheck-schema`, not errors.
//! - Every error that can be cached by a lazily materialized schema branch
//!   is `Clone`, so the same failure can be reported on every access.

use thiserror::Error;

/// Top-level hard error for a validation run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    /// A raw value could not be interpreted as a document.
    #[error("document parsing error: {0}")]
    DocumentParsing(#[from] DocumentParsingError),

    /// A raw value could not be coerced into a parameter list.
    #[error("parameter list parsing error: {0}")]
    ParameterListParsing(#[from] ParameterListParsingError),

    /// A schema branch failed to materialize its children.
    #[error("schema processing error: {0}")]
    SchemaProcessing(#[from] SchemaProcessingError),

    /// The input held no documents at all, so there is no schema to use.
    #[error("input contains no documents")]
    EmptyInput,
}

/// A raw value was not map-shaped where a document was required.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to parse given value: {value} as a document")]
pub struct DocumentParsingError {
    /// String form of the offending value.
    pub value: String,
}

impl DocumentParsingError {
    /// Build the error from anything that renders the offending value.
    pub fn new(value: impl ToString) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

/// A raw value could not be coerced into a list of strings.
///
/// String coercion cannot fail under the current rules; the type keeps the
/// contract open for stricter coercion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to parse given value: {value} as a parameter list")]
pub struct ParameterListParsingError {
    /// String form of the offending value.
    pub value: String,
}

/// A schema branch could not materialize its child nodes.
///
/// Raised on the first visit of the branch during validation, never while
/// the schema itself is being built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaProcessingError {
    /// The `structure` value, or one of its entries, is not a document.
    #[error("lazy loading failed, due to document parsing error: {0}")]
    LazyLoading(DocumentParsingError),

    /// A child definition carries a `value` entry that cannot be coerced.
    #[error("lazy loading failed, due to accepted values parsing error: {0}")]
    AcceptedValues(ParameterListParsingError),
}

impl From<DocumentParsingError> for SchemaProcessingError {
    fn from(err: DocumentParsingError) -> Self {
        Self::LazyLoading(err)
    }
}

impl From<ParameterListParsingError> for SchemaProcessingError {
    fn from(err: ParameterListParsingError) -> Self {
        Self::AcceptedValues(err)
    }
}
