//! # Parameter List
//!
//! Normalizes a scalar-or-sequence value into an ordered list of strings.
//! Used both for the values a document declares under a key and for the
//! values a schema leaf accepts.
//!
//! An empty list is meaningful: as an accepted-values list it means
//! "accept anything".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParameterListParsingError;
use crate::raw::RawValue;

/// Ordered list of stringified parameters. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterList {
    parameters: Vec<String>,
}

impl ParameterList {
    /// The empty list, doubling as the "accept any value" sentinel.
    pub const fn empty() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }

    /// Build a list from a raw value.
    ///
    /// A sequence maps each element to its string form, preserving order and
    /// duplicates. Any other value becomes a one-element list.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterListParsingError`] if an element cannot be
    /// coerced. No coercion rule fails today.
    pub fn from_raw(value: &RawValue) -> Result<Self, ParameterListParsingError> {
        let parameters = match value {
            RawValue::Sequence(items) => items.iter().map(RawValue::to_string).collect(),
            other => vec![other.to_string()],
        };
        Ok(Self { parameters })
    }

    /// Returns true if the list holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns the parameters in order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Returns true if `value` is one of the parameters (case sensitive).
    pub fn contains(&self, value: &str) -> bool {
        self.parameters.iter().any(|p| p == value)
    }

    /// Membership rule used when this list holds accepted values.
    ///
    /// Accepts when this list is empty, or when every declared value is in
    /// this list. Order is ignored, comparison is case sensitive.
    pub fn accepts(&self, declared: &ParameterList) -> bool {
        self.is_empty() || declared.parameters.iter().all(|d| self.contains(d))
    }
}

impl From<Vec<String>> for ParameterList {
    fn from(parameters: Vec<String>) -> Self {
        Self { parameters }
    }
}

impl fmt::Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.parameters.join(", "))
    }
}
