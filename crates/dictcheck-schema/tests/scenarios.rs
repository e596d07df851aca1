//! End-to-end validation scenarios over YAML sources, exercising the
//! public API only.

use dictcheck_core::{Document, ProcessingError, RawValue};
use dictcheck_schema::{validate_documents, DocumentValidationError, Validator};

fn yaml_documents(src: &str) -> Vec<Document> {
    serde_yaml::Deserializer::from_str(src)
        .map(|de| {
            let value = <serde_yaml::Value as serde::Deserialize>::deserialize(de).unwrap();
            Document::from_raw(&RawValue::from(value)).unwrap()
        })
        .collect()
}

fn error(document_index: usize, path: &str, message: &str) -> DocumentValidationError {
    DocumentValidationError {
        document_index,
        path: path.to_string(),
        message: message.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Single-document scenarios
// ---------------------------------------------------------------------------

#[test]
fn valid_leaf() {
    let documents = yaml_documents(
        "---\nA: {presence: required, value: [x, y]}\n---\nA: x\n",
    );
    assert!(validate_documents(&documents).unwrap().is_empty());
}

#[test]
fn missing_required_nested_key() {
    let documents = yaml_documents(
        r#"---
root:
  presence: required
  structure:
    child: {presence: required}
---
root: {}
"#,
    );
    assert_eq!(
        validate_documents(&documents).unwrap(),
        vec![error(1, "/root/", "Key not found: child")]
    );
}

#[test]
fn rejected_value_message_is_exact() {
    let documents = yaml_documents(
        "---\nA: {presence: required, value: [x, y]}\n---\nA: z\n",
    );
    assert_eq!(
        validate_documents(&documents).unwrap(),
        vec![error(
            1,
            "/A",
            "Value(s) is/are not in array of accepted values.\n value(s):  z\n  accepted value(s):  [x, y]"
        )]
    );
}

// ---------------------------------------------------------------------------
// Multi-document scenarios
// ---------------------------------------------------------------------------

#[test]
fn multi_root_multi_document() {
    let documents = yaml_documents(
        r#"---
root1: {presence: required}
root2: {presence: required}
---
root1: a
root2: b
---
root1: a
---
root2: b
"#,
    );
    assert_eq!(
        validate_documents(&documents).unwrap(),
        vec![
            error(2, "/", "Key not found: root2"),
            error(3, "/", "Key not found: root1"),
        ]
    );
}

#[test]
fn deferred_failure_surfaces_only_when_branch_is_visited() {
    let documents = yaml_documents(
        r#"---
A:
  structure: not-a-mapping
---
B: unrelated
"#,
    );
    // A is optional and absent, so its broken structure is never loaded.
    assert!(validate_documents(&documents).unwrap().is_empty());

    let validator = Validator::from_definition(&documents[0]).unwrap();
    let visiting = yaml_documents("A: {}\n");
    let err = validator.validate(&visiting[0]).unwrap_err();
    assert!(matches!(err, ProcessingError::SchemaProcessing(_)));
    assert!(err.to_string().contains("lazy loading failed"));

    // The cached failure is returned again on the next visit.
    assert!(validator.validate(&visiting[0]).is_err());
}

#[test]
fn validation_is_deterministic() {
    let documents = yaml_documents(
        r#"---
top:
  presence: required
  structure:
    kind: {presence: required, value: [a, b]}
    size: {presence: required}
---
top:
  kind: c
"#,
    );
    let first = validate_documents(&documents).unwrap();
    let second = validate_documents(&documents).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}
