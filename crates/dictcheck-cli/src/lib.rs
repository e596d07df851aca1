//! # dictcheck-cli — Dictionary Validation Command-Line Interface
//!
//! Wraps the validation engine in a `dictcheck` binary: a YAML file is
//! split into documents, the first one is taken as the schema, the rest
//! are validated against it, and the outcome is printed and stored as a
//! JSON report.
//!
//! ## Subcommands
//!
//! - `validate` — validate one multi-document YAML file
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live in library modules
//!   so they can be tested without spawning the binary.
//! - Validation rules belong to `dictcheck-schema`. This crate only loads,
//!   reports and maps outcomes to exit codes.

pub mod loader;
pub mod output;
pub mod report;
pub mod validate;

/// Every document conforms to the schema.
pub const EXIT_PASS: u8 = 0;
/// At least one document violates the schema.
pub const EXIT_FAILED: u8 = 1;
/// The run could not complete.
pub const EXIT_INTERNAL_ERROR: u8 = 2;
