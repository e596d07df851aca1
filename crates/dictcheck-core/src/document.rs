//! # Document Model
//!
//! Canonical string-keyed view over one parsed mapping. Documents are
//! created on demand: the root document when a file is loaded, and
//! sub-structures as the validator walks down the tree. They are read-only
//! once built and can be shared across threads.
//!
//! ## Key Handling
//!
//! Keys keep their declaration order. When two raw keys coerce to the same
//! string (for example `1` and `"1"`), the later value wins and the key
//! keeps the position of its first occurrence.

use std::collections::HashMap;

use crate::error::{DocumentParsingError, ParameterListParsingError};
use crate::params::ParameterList;
use crate::raw::RawValue;

/// Immutable string-keyed snapshot of a parsed mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    entries: Vec<(String, RawValue)>,
    index: HashMap<String, usize>,
}

impl Document {
    /// Build a document from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentParsingError`] if the value is not a mapping.
    pub fn from_raw(value: &RawValue) -> Result<Self, DocumentParsingError> {
        let entries = value
            .as_mapping()
            .ok_or_else(|| DocumentParsingError::new(value))?;

        let mut document = Self {
            entries: Vec::with_capacity(entries.len()),
            index: HashMap::with_capacity(entries.len()),
        };
        for (key, value) in entries {
            document.insert(key.clone(), value.clone());
        }
        Ok(document)
    }

    fn insert(&mut self, key: String, value: RawValue) {
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Returns true if the document declares `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the raw value stored under `key`.
    pub fn get_raw(&self, key: &str) -> Option<&RawValue> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    /// String form of the value under `key`, or `None` if absent.
    pub fn get_value(&self, key: &str) -> Option<String> {
        self.get_raw(key).map(RawValue::to_string)
    }

    /// Parameter list built from the value under `key`.
    ///
    /// An absent key yields the empty list.
    pub fn get_list_of_values(&self, key: &str) -> Result<ParameterList, ParameterListParsingError> {
        match self.get_raw(key) {
            Some(value) => ParameterList::from_raw(value),
            None => Ok(ParameterList::empty()),
        }
    }

    /// Parse the value under `key` as a nested document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentParsingError`] if the key is absent or its value is
    /// a scalar or a sequence.
    pub fn get_sub_structure(&self, key: &str) -> Result<Document, DocumentParsingError> {
        match self.get_raw(key) {
            Some(value) => Document::from_raw(value),
            None => Err(DocumentParsingError::new(RawValue::Null)),
        }
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document declares no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<&RawValue> for Document {
    type Error = DocumentParsingError;

    fn try_from(value: &RawValue) -> Result<Self, Self::Error> {
        Document::from_raw(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        Document::from_raw(&RawValue::from(value)).unwrap()
    }

    fn yaml_doc(src: &str) -> Document {
        let value: serde_yaml::Value = serde_yaml::from_str(src).unwrap();
        Document::from_raw(&RawValue::from(value)).unwrap()
    }

    #[test]
    fn from_raw_rejects_scalars_and_sequences() {
        for value in [json!("x"), json!(1), json!(["a"]), json!(null)] {
            let err = Document::from_raw(&RawValue::from(value)).unwrap_err();
            assert!(err.to_string().contains("as a document"));
        }
    }

    #[test]
    fn empty_mapping_is_a_valid_document() {
        let d = doc(json!({}));
        assert!(d.is_empty());
        assert!(!d.contains_key("anything"));
    }

    #[test]
    fn get_value_stringifies() {
        let d = doc(json!({"a": "x", "n": 5, "l": ["p", "q"]}));
        assert_eq!(d.get_value("a").as_deref(), Some("x"));
        assert_eq!(d.get_value("n").as_deref(), Some("5"));
        assert_eq!(d.get_value("l").as_deref(), Some("[p, q]"));
        assert_eq!(d.get_value("missing"), None);
    }

    #[test]
    fn get_list_of_values_wraps_scalar() {
        let d = doc(json!({"a": "x", "l": ["p", "q"]}));
        assert_eq!(d.get_list_of_values("a").unwrap().parameters(), &["x"]);
        assert_eq!(d.get_list_of_values("l").unwrap().parameters(), &["p", "q"]);
        assert!(d.get_list_of_values("missing").unwrap().is_empty());
    }

    #[test]
    fn get_sub_structure_parses_nested_maps() {
        let d = doc(json!({"root": {"child": "v"}}));
        let sub = d.get_sub_structure("root").unwrap();
        assert_eq!(sub.get_value("child").as_deref(), Some("v"));
    }

    #[test]
    fn get_sub_structure_fails_on_non_maps() {
        let d = doc(json!({"scalar": "v", "list": [1, 2]}));
        assert!(d.get_sub_structure("scalar").is_err());
        assert!(d.get_sub_structure("list").is_err());
        assert!(d.get_sub_structure("missing").is_err());
    }

    #[test]
    fn keys_follow_declaration_order() {
        let d = yaml_doc("second: 1\nfirst: 2\nthird: 3\n");
        assert_eq!(d.keys().collect::<Vec<_>>(), vec!["second", "first", "third"]);
    }

    #[test]
    fn colliding_keys_are_last_write_wins() {
        // `1` and `"1"` are distinct YAML keys that coerce to the same string.
        let d = yaml_doc("1: first\nother: x\n\"1\": second\n");
        assert_eq!(d.len(), 2);
        assert_eq!(d.get_value("1").as_deref(), Some("second"));
        assert_eq!(d.keys().collect::<Vec<_>>(), vec!["1", "other"]);
    }
}
