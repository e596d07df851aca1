//! # Raw Value — Tagged Untyped Input
//!
//! Parsed YAML (or JSON) arrives as an untyped tree. [`RawValue`] makes the
//! three shapes the validator cares about explicit: scalars, ordered
//! sequences and string-keyed mappings.
//!
//! ## Coercion Rules
//!
//! - Mapping keys of any scalar type are coerced to their string form when
//!   the tree is converted. Collisions are resolved later by
//!   [`Document`](crate::Document).
//! - YAML tags are dropped; the tagged inner value is kept.
//! - Numbers keep the textual form produced by the parser, so `42` stays
//!   `42` and `1.5` stays `1.5` when rendered into messages.

use std::fmt;

/// An untyped parsed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Explicit null (`~`, `null` or an empty YAML value).
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar, kept in its textual form.
    Number(String),
    /// String scalar.
    String(String),
    /// Ordered sequence.
    Sequence(Vec<RawValue>),
    /// Mapping with keys already coerced to strings, in declaration order.
    Mapping(Vec<(String, RawValue)>),
}

impl RawValue {
    /// Returns true for null, booleans, numbers and strings.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, RawValue::Sequence(_) | RawValue::Mapping(_))
    }

    /// Returns the string slice if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&[(String, RawValue)]> {
        match self {
            RawValue::Mapping(entries) => Some(entries),
            _ => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => f.write_str("null"),
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Number(n) => f.write_str(n),
            RawValue::String(s) => f.write_str(s),
            RawValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            RawValue::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&serde_yaml::Value> for RawValue {
    fn from(value: &serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => RawValue::Null,
            serde_yaml::Value::Bool(b) => RawValue::Bool(*b),
            serde_yaml::Value::Number(n) => RawValue::Number(n.to_string()),
            serde_yaml::Value::String(s) => RawValue::String(s.clone()),
            serde_yaml::Value::Sequence(seq) => {
                RawValue::Sequence(seq.iter().map(RawValue::from).collect())
            }
            serde_yaml::Value::Mapping(map) => RawValue::Mapping(
                map.iter()
                    .map(|(k, v)| (RawValue::from(k).to_string(), RawValue::from(v)))
                    .collect(),
            ),
            // Ignore YAML tags, just convert the inner value.
            serde_yaml::Value::Tagged(tagged) => RawValue::from(&tagged.value),
        }
    }
}

impl From<serde_yaml::Value> for RawValue {
    fn from(value: serde_yaml::Value) -> Self {
        RawValue::from(&value)
    }
}

impl From<&serde_json::Value> for RawValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Bool(b) => RawValue::Bool(*b),
            serde_json::Value::Number(n) => RawValue::Number(n.to_string()),
            serde_json::Value::String(s) => RawValue::String(s.clone()),
            serde_json::Value::Array(items) => {
                RawValue::Sequence(items.iter().map(RawValue::from).collect())
            }
            // Object key order follows serde_json's map ordering.
            serde_json::Value::Object(map) => RawValue::Mapping(
                map.iter()
                    .map(|(k, v)| (k.clone(), RawValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        RawValue::from(&value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}
