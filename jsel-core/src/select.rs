//! Element selection

use crate::error::{Result, SelectError};
use crate::indices::IndexSpec;
use serde_json::Value;

/// Select the elements of `list` at the positions named by `indices`.
///
/// The result preserves the order and multiplicity of the specification, so
/// duplicate positions yield duplicate elements and an empty specification
/// yields an empty result. Every position is bounds-checked before any
/// element is cloned; checking stops at the first offending position.
/// Negative positions are out of bounds.
pub fn select<T: Clone>(list: &[T], indices: &IndexSpec) -> Result<Vec<T>> {
    let len = list.len();
    for &index in indices.as_slice() {
        if index < 0 || index as u64 >= len as u64 {
            return Err(SelectError::OutOfBounds { index, len });
        }
    }

    Ok(indices
        .as_slice()
        .iter()
        .map(|&index| list[index as usize].clone())
        .collect())
}

/// Select using the raw `indices` value of an input document.
///
/// Validates the value into an [`IndexSpec`] first, so type errors surface
/// before any bounds check runs.
pub fn select_value(list: &[Value], indices: &Value) -> Result<Vec<Value>> {
    let spec = IndexSpec::from_value(indices)?;
    select(list, &spec)
}
