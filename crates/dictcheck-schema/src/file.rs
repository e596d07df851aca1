//! # Multi-Document Validation
//!
//! A validated file is a sequence of documents. Document 0 is the schema
//! definition; every later document is validated against it and its
//! findings are tagged with its index.

use dictcheck_core::{Document, ProcessingError, RawValue};

use crate::process::Validator;
use crate::violation::DocumentValidationError;

/// Index of the first document validated against the schema.
pub const FIRST_DOCUMENT_INDEX: usize = 1;

/// Validate documents `1..n` against the schema defined by document 0.
///
/// Findings are concatenated in document order. A file holding only the
/// schema definition validates cleanly.
///
/// # Errors
///
/// Returns [`ProcessingError::EmptyInput`] if `documents` is empty, and any
/// hard failure raised while building the schema or validating a document.
/// The first hard failure stops the run.
pub fn validate_documents(
    documents: &[Document],
) -> Result<Vec<DocumentValidationError>, ProcessingError> {
    let (definition, rest) = documents.split_first().ok_or(ProcessingError::EmptyInput)?;
    let validator = Validator::from_definition(definition)?;

    let mut errors = Vec::new();
    for (offset, document) in rest.iter().enumerate() {
        let index = FIRST_DOCUMENT_INDEX + offset;
        let found = validator.validate(document)?;
        tracing::debug!(document = index, errors = found.len(), "validated document");
        errors.extend(
            found
                .into_iter()
                .map(|error| DocumentValidationError::from_schema_error(index, error)),
        );
    }
    Ok(errors)
}

/// Convert raw parsed values into documents, then [`validate_documents`].
///
/// # Errors
///
/// Returns [`ProcessingError::DocumentParsing`] if any value is not a
/// mapping, plus everything [`validate_documents`] can return.
pub fn validate_raw_documents(
    raw_documents: &[RawValue],
) -> Result<Vec<DocumentValidationError>, ProcessingError> {
    let documents = raw_documents
        .iter()
        .map(Document::from_raw)
        .collect::<Result<Vec<_>, _>>()?;
    validate_documents(&documents)
}
