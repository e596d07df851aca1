//! # Schema Nodes
//!
//! A schema node is one constraint on one key of a document. Nodes come in
//! two shapes, decided once when the node is built:
//!
//! - [`LeafNode`]: constrains the values declared under its key.
//! - [`BranchNode`]: constrains a nested sub-document through child nodes.
//!
//! ## Lazy Materialization
//!
//! A branch keeps its raw `structure` value and builds its children on the
//! first call to [`BranchNode::next_nodes`]. The result, or the failure, is
//! stored in a [`OnceLock`] and returned unchanged on every later call. A
//! malformed `structure` therefore only fails validations that actually
//! reach the branch. `OnceLock` also makes the first materialization safe
//! when several threads validate documents against the same schema.
//!
//! ## Meta-Schema Vocabulary
//!
//! | Key         | Meaning                                                   |
//! |-------------|-----------------------------------------------------------|
//! | `structure` | present ⇒ branch; its mapping defines the children        |
//! | `presence`  | `required` ⇒ key must exist, anything else optional       |
//! | `comment`   | free text, defaults to [`EMPTY_COMMENT`]                  |
//! | `value`     | scalar or list of accepted values; absent/empty ⇒ any     |

use std::sync::OnceLock;

use dictcheck_core::{
    Document, ParameterList, ParameterListParsingError, RawValue, SchemaProcessingError,
};

/// Comment used when a definition carries no `comment` key.
pub const EMPTY_COMMENT: &str = "no comment available";
/// Reserved key marking a branch node.
pub const STRUCTURE_KEY: &str = "structure";
/// Reserved key holding the free-text comment.
pub const COMMENT_KEY: &str = "comment";
/// Reserved key holding the accepted values.
pub const VALUE_KEY: &str = "value";
/// Reserved key holding the presence rule.
pub const PRESENCE_KEY: &str = "presence";
/// The only `presence` value that makes a node required.
pub const PRESENCE_REQUIRED: &str = "required";

static NO_ACCEPTED_VALUES: ParameterList = ParameterList::empty();

/// Attributes shared by leaf and branch nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMeta {
    /// Key this node constrains.
    pub name: String,
    /// Ancestor names joined by `/`, with leading and trailing `/`.
    pub path: String,
    /// Whether the key must be present.
    pub required: bool,
    /// Free-text description from the schema.
    pub comment: String,
}

/// A schema constraint: either a leaf or a lazily expanded branch.
#[derive(Debug)]
pub enum SchemaNode {
    /// Constrains the values declared under a key.
    Leaf(LeafNode),
    /// Constrains a nested sub-document.
    Branch(BranchNode),
}

impl SchemaNode {
    /// Shared attributes of the node.
    pub fn meta(&self) -> &NodeMeta {
        match self {
            SchemaNode::Leaf(leaf) => &leaf.meta,
            SchemaNode::Branch(branch) => &branch.meta,
        }
    }

    pub fn name(&self) -> &str {
        &self.meta().name
    }

    pub fn path(&self) -> &str {
        &self.meta().path
    }

    pub fn is_required(&self) -> bool {
        self.meta().required
    }

    pub fn comment(&self) -> &str {
        &self.meta().comment
    }

    /// Accepted values for a leaf; always empty for a branch.
    pub fn accepted_values(&self) -> &ParameterList {
        match self {
            SchemaNode::Leaf(leaf) => &leaf.accepted_values,
            SchemaNode::Branch(_) => &NO_ACCEPTED_VALUES,
        }
    }

    /// Child nodes. A leaf has none; a branch materializes them on first call.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaProcessingError`] if a branch's structure is malformed.
    pub fn next_nodes(&self) -> Result<&[SchemaNode], SchemaProcessingError> {
        match self {
            SchemaNode::Leaf(_) => Ok(&[]),
            SchemaNode::Branch(branch) => branch.next_nodes(),
        }
    }

    /// Returns true for branch nodes.
    pub fn has_substructure(&self) -> bool {
        matches!(self, SchemaNode::Branch(_))
    }
}

/// Leaf node: a key whose values must be among the accepted ones.
#[derive(Debug)]
pub struct LeafNode {
    meta: NodeMeta,
    accepted_values: ParameterList,
}

impl LeafNode {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    /// Accepted values; empty means any value is accepted.
    pub fn accepted_values(&self) -> &ParameterList {
        &self.accepted_values
    }
}

/// Branch node: a key whose value is a sub-document checked by child nodes.
#[derive(Debug)]
pub struct BranchNode {
    meta: NodeMeta,
    structure: RawValue,
    children: OnceLock<Result<Vec<SchemaNode>, SchemaProcessingError>>,
}

impl BranchNode {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    /// The raw `structure` value this branch expands.
    pub fn structure(&self) -> &RawValue {
        &self.structure
    }

    /// Returns true once the children (or the failure) have been computed.
    pub fn is_materialized(&self) -> bool {
        self.children.get().is_some()
    }

    /// Child nodes, computed at most once.
    ///
    /// Children follow the declaration order of the `structure` mapping and
    /// get the path `parent.path + parent.name + "/"`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaProcessingError`] if `structure`, or any entry in it,
    /// is not a mapping. The same error is returned on every call.
    pub fn next_nodes(&self) -> Result<&[SchemaNode], SchemaProcessingError> {
        match self.children.get_or_init(|| self.load_children()) {
            Ok(children) => Ok(children),
            Err(err) => Err(err.clone()),
        }
    }

    fn load_children(&self) -> Result<Vec<SchemaNode>, SchemaProcessingError> {
        let structure = Document::from_raw(&self.structure)?;
        let child_path = format!("{}{}/", self.meta.path, self.meta.name);

        let children = structure
            .iter()
            .map(|(name, definition)| -> Result<SchemaNode, SchemaProcessingError> {
                let definition = Document::from_raw(definition)?;
                Ok(SchemaNodeFactory.create_node(name, &child_path, &definition)?)
            })
            .collect::<Result<Vec<_>, _>>();

        match &children {
            Ok(nodes) => tracing::trace!(
                path = %child_path,
                children = nodes.len(),
                "materialized schema branch"
            ),
            Err(err) => tracing::trace!(path = %child_path, error = %err, "schema branch failed to materialize"),
        }
        children
    }
}

/// Builds schema nodes from definition documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaNodeFactory;

impl SchemaNodeFactory {
    /// Build one node named `name` at `path` from its definition document.
    ///
    /// Produces a branch iff the definition contains `structure`. The
    /// structure itself is not inspected here.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterListParsingError`] if the `value` entry cannot be
    /// coerced into accepted values.
    pub fn create_node(
        &self,
        name: &str,
        path: &str,
        definition: &Document,
    ) -> Result<SchemaNode, ParameterListParsingError> {
        let meta = NodeMeta {
            name: name.to_string(),
            path: path.to_string(),
            required: is_presence_required(definition),
            comment: comment(definition),
        };

        let node = match definition.get_raw(STRUCTURE_KEY) {
            Some(structure) => SchemaNode::Branch(BranchNode {
                meta,
                structure: structure.clone(),
                children: OnceLock::new(),
            }),
            None => SchemaNode::Leaf(LeafNode {
                meta,
                accepted_values: accepted_values(definition)?,
            }),
        };
        Ok(node)
    }
}

fn is_presence_required(definition: &Document) -> bool {
    definition.get_raw(PRESENCE_KEY).and_then(RawValue::as_str) == Some(PRESENCE_REQUIRED)
}

fn comment(definition: &Document) -> String {
    definition
        .get_value(COMMENT_KEY)
        .unwrap_or_else(|| EMPTY_COMMENT.to_string())
}

fn accepted_values(definition: &Document) -> Result<ParameterList, ParameterListParsingError> {
    match definition.get_raw(VALUE_KEY) {
        None | Some(RawValue::Null) => Ok(ParameterList::empty()),
        Some(value) => ParameterList::from_raw(value),
    }
}
