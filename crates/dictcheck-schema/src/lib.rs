//! # dictcheck-schema — Schema Model & Validation Engine
//!
//! Validates documents against schemas written in the same document
//! format. A schema definition looks like:
//!
//! ```yaml
//! pmMetaData:
//!   presence: required
//!   structure:
//!     pmHeader:
//!       presence: required
//!       structure:
//!         nfType: {presence: required, value: [AMF, SMF, UPF]}
//!         pmDefVsn: {presence: required}
//! ```
//!
//! ## Modules
//!
//! - [`node`] — leaf and branch schema nodes and the node factory. Branch
//!   children are built lazily, once, on first visit.
//! - [`schema`] — the ordered root-node set and its factory.
//! - [`process`] — the breadth-first validation process and [`Validator`].
//! - [`file`] — multi-document orchestration: document 0 is the schema.
//! - [`violation`] — soft, path-tagged findings.
//!
//! ## Crate Policy
//!
//! - Depends only on `dictcheck-core` internally.
//! - No I/O. Loading and reporting belong to `dictcheck-cli`.
//! - Soft findings are returned as data; hard failures as
//!   [`dictcheck_core::ProcessingError`].

pub mod file;
pub mod node;
pub mod process;
pub mod schema;
pub mod violation;

pub use file::{validate_documents, validate_raw_documents, FIRST_DOCUMENT_INDEX};
pub use node::{BranchNode, LeafNode, NodeMeta, SchemaNode, SchemaNodeFactory, EMPTY_COMMENT};
pub use process::{ValidationProcess, Validator};
pub use schema::{Schema, SchemaFactory};
pub use violation::{DocumentValidationError, SchemaValidationError};
