//! # Schema
//!
//! A schema is the ordered list of root nodes built from a definition
//! document: one root per top-level key, in declaration order, each with
//! path `/`. Only the roots are built eagerly; branch children wait until
//! validation reaches them.

use dictcheck_core::{Document, ProcessingError};

use crate::node::{SchemaNode, SchemaNodeFactory};

/// Path given to every root node.
pub const ROOT_PATH: &str = "/";

/// Ordered set of root schema nodes. Immutable once built.
#[derive(Debug)]
pub struct Schema {
    root_nodes: Vec<SchemaNode>,
}

impl Schema {
    pub fn root_nodes(&self) -> &[SchemaNode] {
        &self.root_nodes
    }

    pub fn len(&self) -> usize {
        self.root_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root_nodes.is_empty()
    }
}

/// Builds a [`Schema`] from a definition document.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaFactory;

impl SchemaFactory {
    /// Build the tree-structured schema described by `definition`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::DocumentParsing`] if a top-level entry is
    /// not a mapping, or [`ProcessingError::ParameterListParsing`] if its
    /// accepted values cannot be coerced.
    pub fn create_schema(&self, definition: &Document) -> Result<Schema, ProcessingError> {
        let root_nodes = definition
            .keys()
            .map(|name| -> Result<SchemaNode, ProcessingError> {
                let node_definition = definition.get_sub_structure(name)?;
                Ok(SchemaNodeFactory.create_node(name, ROOT_PATH, &node_definition)?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(roots = root_nodes.len(), "built schema");
        Ok(Schema { root_nodes })
    }
}

impl TryFrom<&Document> for Schema {
    type Error = ProcessingError;

    fn try_from(definition: &Document) -> Result<Self, Self::Error> {
        SchemaFactory.create_schema(definition)
    }
}
