//! # CLI Validate Flows
//!
//! Runs the `validate` handler against fixture copies in a temporary
//! directory and checks exit codes and the stored JSON report.

use std::path::{Path, PathBuf};

use dictcheck_cli::output::report_path_for;
use dictcheck_cli::report::{ReportStatus, ValidationReport};
use dictcheck_cli::validate::{run_validate, OutputFormat, ValidateArgs};
use dictcheck_cli::{EXIT_FAILED, EXIT_INTERNAL_ERROR, EXIT_PASS};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn copy_fixture(dir: &Path, name: &str) -> PathBuf {
    let source = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name);
    let target = dir.join(name);
    std::fs::copy(&source, &target).unwrap();
    target
}

fn read_report(path: &Path) -> ValidationReport {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// Exit codes and reports
// ---------------------------------------------------------------------------

#[test]
fn valid_dictionary_exits_zero_with_pass_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = copy_fixture(dir.path(), "pm_dictionary_valid.yaml");

    assert_eq!(run_validate(&ValidateArgs::for_path(&input)).unwrap(), EXIT_PASS);

    let report_path = dir.path().join("pm_dictionary_valid-validation-results.json");
    assert_eq!(report_path, report_path_for(&input));
    let report = read_report(&report_path);
    assert_eq!(report.criteria, ReportStatus::Pass);
    assert_eq!(report.file, input.display().to_string());
}

#[test]
fn invalid_dictionary_exits_one_with_failed_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = copy_fixture(dir.path(), "pm_dictionary_invalid.yaml");
    let args = ValidateArgs {
        format: OutputFormat::Json,
        ..ValidateArgs::for_path(&input)
    };

    assert_eq!(run_validate(&args).unwrap(), EXIT_FAILED);

    let report = read_report(&report_path_for(&input));
    assert_eq!(report.criteria, ReportStatus::Failed);
    let indexes: Vec<usize> = report.errors.iter().map(|e| e.document_index).collect();
    assert_eq!(indexes, vec![1, 2, 2, 3]);
}

#[test]
fn report_json_uses_camel_case_error_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = copy_fixture(dir.path(), "pm_dictionary_invalid.yaml");
    let output = dir.path().join("out.json");
    let args = ValidateArgs {
        output: Some(output.clone()),
        ..ValidateArgs::for_path(&input)
    };
    run_validate(&args).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["criteria"], "FAILED");
    assert_eq!(value["errors"][0]["documentIndex"], 1);
    assert_eq!(value["errors"][0]["path"], "/pmMetaData/pmHeader/");
    assert!(value["date"]
        .as_str()
        .and_then(|d| chrono::DateTime::parse_from_rfc3339(d).ok())
        .is_some());
}

#[test]
fn hard_failures_exit_two_without_report() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["broken_structure.yaml", "not_a_mapping.yaml"] {
        let input = copy_fixture(dir.path(), name);
        assert_eq!(
            run_validate(&ValidateArgs::for_path(&input)).unwrap(),
            EXIT_INTERNAL_ERROR,
            "{name}"
        );
        assert!(!report_path_for(&input).exists(), "{name}");
    }
}

#[test]
fn unwritable_report_location_is_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = copy_fixture(dir.path(), "pm_dictionary_valid.yaml");
    let args = ValidateArgs {
        output: Some(dir.path().join("missing-dir").join("report.json")),
        ..ValidateArgs::for_path(&input)
    };
    assert_eq!(run_validate(&args).unwrap(), EXIT_INTERNAL_ERROR);
}
