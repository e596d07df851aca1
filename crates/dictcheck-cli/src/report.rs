//! # Validation Report
//!
//! The JSON summary written after a `validate` run. Shape:
//!
//! ```json
//! {
//!   "file": "pm_dictionary.yaml",
//!   "date": "2026-01-01T00:00:00Z",
//!   "criteria": "FAILED",
//!   "errors": [
//!     {"documentIndex": 1, "path": "/pmMetaData/pmHeader/", "message": "Key not found: pmDefVsn"}
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use dictcheck_schema::DocumentValidationError;
use serde::{Deserialize, Serialize};

/// Verdict of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    Pass,
    Failed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// The validated file, as given on the command line.
    pub file: String,
    /// When the run finished.
    pub date: DateTime<Utc>,
    /// PASS when `errors` is empty, FAILED otherwise.
    pub criteria: ReportStatus,
    pub errors: Vec<DocumentValidationError>,
}

impl ValidationReport {
    /// Build a report stamped with the current time.
    pub fn new(file: impl Into<String>, errors: Vec<DocumentValidationError>) -> Self {
        Self::with_date(file, Utc::now(), errors)
    }

    pub fn with_date(
        file: impl Into<String>,
        date: DateTime<Utc>,
        errors: Vec<DocumentValidationError>,
    ) -> Self {
        let criteria = if errors.is_empty() {
            ReportStatus::Pass
        } else {
            ReportStatus::Failed
        };
        Self {
            file: file.into(),
            date,
            criteria,
            errors,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.criteria == ReportStatus::Pass
    }

    /// Pretty-printed JSON form of the report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize validation report")
    }

    /// Write the JSON report to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_report(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json + "\n")
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), criteria = %self.criteria, "wrote validation report");
        Ok(())
    }

    /// Human-readable form for the console.
    pub fn render_text(&self) -> String {
        let mut lines = vec![
            format!("file: {}", self.file),
            format!("date: {}", self.date.to_rfc3339()),
            format!("criteria: {}", self.criteria),
        ];
        if self.errors.is_empty() {
            lines.push("errors: none".to_string());
        } else {
            lines.push(format!("errors: {}", self.errors.len()));
            lines.extend(self.errors.iter().map(|error| format!("  - {error}")));
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
