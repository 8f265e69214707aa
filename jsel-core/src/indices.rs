//! Index specification

use crate::error::{Result, SelectError};
use crate::kind::ValueKind;
use serde_json::{Number, Value};

/// Index specification: one position or an ordered list of positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSpec {
    /// A single position
    Single(i64),
    /// An ordered list of positions
    Many(Vec<i64>),
}

impl IndexSpec {
    /// Build a specification from the raw `indices` document value.
    ///
    /// Accepts an integer or an array of integers. Anything else is rejected
    /// with the kind of the whole value: an array containing a float is
    /// rejected as `array`, not per element.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => as_index(n)
                .map(IndexSpec::Single)
                .ok_or_else(|| SelectError::IndicesType(ValueKind::of(value))),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Number(n) => as_index(n),
                    _ => None,
                })
                .collect::<Option<Vec<i64>>>()
                .map(IndexSpec::Many)
                .ok_or_else(|| SelectError::IndicesType(ValueKind::of(value))),
            _ => Err(SelectError::IndicesType(ValueKind::of(value))),
        }
    }

    /// Normalized view: a single position acts as a one-element list.
    pub fn as_slice(&self) -> &[i64] {
        match self {
            IndexSpec::Single(index) => std::slice::from_ref(index),
            IndexSpec::Many(indices) => indices,
        }
    }

    /// Number of positions after normalization.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True when no positions are requested.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// Integer value of `n`, saturating above `i64::MAX`.
///
/// A slice can never hold more than `i64::MAX` elements, so a saturated
/// position still fails the bounds check.
fn as_index(n: &Number) -> Option<i64> {
    if let Some(index) = n.as_i64() {
        Some(index)
    } else if n.is_u64() {
        Some(i64::MAX)
    } else {
        None
    }
}
