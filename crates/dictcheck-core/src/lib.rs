//! # dictcheck-core — Foundational Types for dictcheck
//!
//! This crate is the bedrock of the dictcheck workspace. It defines the
//! value model that every validation layer reads from. Every other crate
//! in the workspace depends on `dictcheck-core`; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit tagged input.** Parsed YAML/JSON is converted once into
//!    [`RawValue`]. No layer above this crate inspects parser-specific
//!    value types.
//!
//! 2. **Fallible coercion.** Turning a raw value into a [`Document`] or a
//!    [`ParameterList`] returns a `Result`; there are no implicit casts.
//!
//! 3. **Immutable snapshots.** Documents never change after construction
//!    and are `Send + Sync`, so one document can be read by several
//!    validations at once.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dictcheck-*` crates (this is the leaf of the DAG).
//! - No I/O.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod params;
pub mod raw;

// Re-export primary types for ergonomic imports.
pub use document::Document;
pub use error::{
    DocumentParsingError, ParameterListParsingError, ProcessingError, SchemaProcessingError,
};
pub use params::ParameterList;
pub use raw::RawValue;
