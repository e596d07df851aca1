//! # Validation Process
//!
//! Breadth-first validation of one document against one schema.
//!
//! ## Algorithm
//!
//! The process owns a work queue of validation steps. A step pairs a list
//! of schema nodes with the document (or sub-document) they constrain. The
//! queue starts with the schema roots and the top-level document; each
//! dequeued step checks its nodes in declaration order:
//!
//! 1. Key absent: a required node yields `Key not found: {name}` at the
//!    node path; an optional node yields nothing.
//! 2. Key present on a branch: the branch children and the sub-document are
//!    enqueued as a new step.
//! 3. Key present on a leaf: the declared values must be accepted by the
//!    leaf, otherwise a value violation is recorded at `path + name`.
//!
//! The queue keeps stack depth independent of schema depth. Violations come
//! out in dequeue order, then declaration order, so repeated runs over the
//! same pair produce identical lists.
//!
//! ## Hard Failures
//!
//! A branch whose children cannot be materialized, or a document value that
//! is not a mapping where the schema expects a sub-document, aborts the
//! whole run with a [`ProcessingError`]. Only disagreements between a
//! well-formed document and a well-formed schema are collected.

use std::borrow::Cow;
use std::collections::VecDeque;

use dictcheck_core::{Document, ProcessingError};

use crate::node::SchemaNode;
use crate::schema::{Schema, SchemaFactory};
use crate::violation::SchemaValidationError;

/// One work-queue entry: schema nodes checked against one document.
#[derive(Debug)]
struct ValidationStep<'a> {
    schema_nodes: &'a [SchemaNode],
    document: Cow<'a, Document>,
}

/// Single-use validation of one document against one schema.
#[derive(Debug)]
pub struct ValidationProcess<'a> {
    validation_steps: VecDeque<ValidationStep<'a>>,
    errors: Vec<SchemaValidationError>,
}

impl<'a> ValidationProcess<'a> {
    pub fn new(schema: &'a Schema, document: &'a Document) -> Self {
        let mut validation_steps = VecDeque::new();
        validation_steps.push_back(ValidationStep {
            schema_nodes: schema.root_nodes(),
            document: Cow::Borrowed(document),
        });
        Self {
            validation_steps,
            errors: Vec::new(),
        }
    }

    /// Drain the work queue and return the collected violations.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError`] if a visited branch cannot materialize its
    /// children or the document holds a non-mapping where a sub-document is
    /// expected.
    pub fn validate(mut self) -> Result<Vec<SchemaValidationError>, ProcessingError> {
        let mut steps = 0usize;
        while let Some(step) = self.validation_steps.pop_front() {
            steps += 1;
            tracing::trace!(
                step = steps,
                nodes = step.schema_nodes.len(),
                queued = self.validation_steps.len(),
                "processing validation step"
            );
            self.validate_step(step)?;
        }

        tracing::debug!(steps, errors = self.errors.len(), "validation finished");
        Ok(self.errors)
    }

    fn validate_step(&mut self, step: ValidationStep<'a>) -> Result<(), ProcessingError> {
        for schema_node in step.schema_nodes {
            self.validate_node(&step.document, schema_node)?;
        }
        Ok(())
    }

    fn validate_node(
        &mut self,
        document: &Document,
        schema_node: &'a SchemaNode,
    ) -> Result<(), ProcessingError> {
        if !document.contains_key(schema_node.name()) {
            if schema_node.is_required() {
                self.add_required_key_not_found_error(schema_node);
            }
            return Ok(());
        }

        match schema_node {
            SchemaNode::Branch(_) => self.add_next_level_step(document, schema_node),
            SchemaNode::Leaf(_) => {
                let declared = document.get_list_of_values(schema_node.name())?;
                if !schema_node.accepted_values().accepts(&declared) {
                    self.add_incorrect_value_error(document, schema_node);
                }
                Ok(())
            }
        }
    }

    fn add_next_level_step(
        &mut self,
        document: &Document,
        schema_node: &'a SchemaNode,
    ) -> Result<(), ProcessingError> {
        let schema_nodes = schema_node.next_nodes()?;
        let sub_document = document.get_sub_structure(schema_node.name())?;
        self.validation_steps.push_back(ValidationStep {
            schema_nodes,
            document: Cow::Owned(sub_document),
        });
        Ok(())
    }

    fn add_required_key_not_found_error(&mut self, schema_node: &SchemaNode) {
        self.errors.push(SchemaValidationError::new(
            schema_node.path(),
            format!("Key not found: {}", schema_node.name()),
        ));
    }

    fn add_incorrect_value_error(&mut self, document: &Document, schema_node: &SchemaNode) {
        let declared = document.get_value(schema_node.name()).unwrap_or_default();
        self.errors.push(SchemaValidationError::new(
            format!("{}{}", schema_node.path(), schema_node.name()),
            format!(
                "Value(s) is/are not in array of accepted values.\n value(s):  {}\n  accepted value(s):  {}",
                declared,
                schema_node.accepted_values()
            ),
        ));
    }
}

/// Validates any number of documents against one schema.
///
/// The schema is built once; each call to [`Validator::validate`] runs a
/// fresh [`ValidationProcess`]. `Validator` is `Send + Sync`, so documents
/// can be validated from several threads against the same instance.
#[derive(Debug)]
pub struct Validator {
    schema: Schema,
}

impl Validator {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Build the schema from a definition document and wrap it.
    pub fn from_definition(definition: &Document) -> Result<Self, ProcessingError> {
        SchemaFactory.create_schema(definition).map(Self::new)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate one document.
    pub fn validate(&self, document: &Document) -> Result<Vec<SchemaValidationError>, ProcessingError> {
        ValidationProcess::new(&self.schema, document).validate()
    }
}
