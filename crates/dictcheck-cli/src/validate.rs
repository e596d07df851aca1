//! # Validate Subcommand
//!
//! Loads a multi-document YAML file, validates every document against the
//! schema held in the first one, prints the outcome and stores it as a
//! JSON report next to the input.
//!
//! ## Exit Codes
//!
//! - [`crate::EXIT_PASS`] when no document violates the schema.
//! - [`crate::EXIT_FAILED`] when at least one soft error was found.
//! - [`crate::EXIT_INTERNAL_ERROR`] when the run could not complete: the
//!   file is unreadable or holds no documents, a document is not a mapping,
//!   or a schema branch fails to materialize. No report is written then.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use dictcheck_schema::validate_raw_documents;

use crate::loader::load_documents_from_file;
use crate::output::report_path_for;
use crate::report::ValidationReport;
use crate::{EXIT_FAILED, EXIT_INTERNAL_ERROR, EXIT_PASS};

/// Console rendering of the operation result.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the `dictcheck validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// YAML file whose first document is the schema definition.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Where to store the JSON report. Defaults to
    /// `<dir>/<stem>-validation-results.json` next to the input.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the result without writing a report file.
    #[arg(long)]
    pub no_report: bool,

    /// Console output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ValidateArgs {
    /// Arguments for validating `path` with every option at its default.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            output: None,
            no_report: false,
            format: OutputFormat::Text,
        }
    }

    /// The report location, if a report should be written.
    pub fn report_path(&self) -> Option<PathBuf> {
        if self.no_report {
            return None;
        }
        Some(
            self.output
                .clone()
                .unwrap_or_else(|| report_path_for(&self.path)),
        )
    }
}

/// Execute the validate subcommand.
///
/// Internal failures are printed and turned into
/// [`EXIT_INTERNAL_ERROR`] rather than propagated.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    println!("# Executing a 'validate' operation ...");

    let report = match validate_file(args) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            println!("# Application fails with internal error.");
            return Ok(EXIT_INTERNAL_ERROR);
        }
    };
    println!("# ... Done.");

    println!("# Operation result:");
    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(report_path) = args.report_path() {
        if let Err(e) = report.write_report(&report_path) {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            println!("# Application fails with internal error.");
            return Ok(EXIT_INTERNAL_ERROR);
        }
        println!("# Result was stored in a file: '{}'", report_path.display());
    }

    println!("# Application exits successfully.");
    Ok(if report.is_pass() { EXIT_PASS } else { EXIT_FAILED })
}

/// Load and validate the file named by `args`, producing its report.
///
/// # Errors
///
/// Returns an error on any hard failure: unreadable or malformed file,
/// empty input, non-mapping documents, or schema materialization failure.
pub fn validate_file(args: &ValidateArgs) -> Result<ValidationReport> {
    let documents = load_documents_from_file(&args.path)?;
    tracing::info!(
        path = %args.path.display(),
        documents = documents.len(),
        "loaded documents"
    );

    let errors = validate_raw_documents(&documents)
        .with_context(|| format!("failed to validate {}", args.path.display()))?;
    tracing::info!(errors = errors.len(), "validation finished");

    Ok(ValidationReport::new(args.path.display().to_string(), errors))
}
