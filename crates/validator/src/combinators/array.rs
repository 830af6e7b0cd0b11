//! ARRAY combinator - validates each element of a JSON array

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, ValidationErrors, ValidationResult};

// ============================================================================
// ARRAY COMBINATOR
// ============================================================================

/// Validates each element of an array.
///
/// All elements are checked; errors of element `i` are re-rooted under
/// index `i`.
///
/// # Examples
///
/// ```rust,ignore
/// use conform_validator::prelude::*;
///
/// let tags = array(string());
///
/// let errors = tags.validate(&json!(["a", 1, "c", false])).unwrap_err();
/// // paths: [1], [3]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Array<V> {
    inner: V,
}

impl<V> Array<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the element validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validate> Validate for Array<V> {
    type Output = Vec<V::Output>;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        let Some(items) = input.as_array() else {
            return Err(ValidationError::invalid_type("array", input).into());
        };

        let mut output = Vec::with_capacity(items.len());
        let mut errors = ValidationErrors::new();

        for (index, item) in items.iter().enumerate() {
            match self.inner.validate(item) {
                Ok(value) => output.push(value),
                Err(item_errors) => errors.append(item_errors.at(index)),
            }
        }

        errors.into_result(output)
    }
}

/// Creates an array validator.
pub fn array<V>(element: V) -> Array<V> {
    Array::new(element)
}
