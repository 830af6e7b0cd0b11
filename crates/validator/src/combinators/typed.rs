//! TYPED combinator - hands validated output to a companion Rust type
//!
//! Object validators produce a JSON map. [`Typed`] deserializes that map into
//! a hand-written struct, so typed code works with named fields. If the
//! struct and the schema drift apart, the mismatch surfaces as an
//! `output_mismatch` error instead of a panic.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::foundation::{IntoFieldValue, Validate, ValidationError, ValidationResult};

/// Validates with `V`, then deserializes the output into `T`.
pub struct Typed<V, T> {
    inner: V,
    _output: PhantomData<fn() -> T>,
}

impl<V, T> Typed<V, T> {
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _output: PhantomData,
        }
    }

    /// Returns a reference to the untyped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V, T> Typed<V, T>
where
    V: Validate,
    V::Output: IntoFieldValue,
    T: DeserializeOwned,
{
    fn convert(output: V::Output) -> ValidationResult<T> {
        let value = output.into_field_value().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|err| {
            tracing::warn!(
                output_type = std::any::type_name::<T>(),
                error = %err,
                "validated output does not fit its companion type"
            );
            ValidationError::new("output_mismatch", err.to_string())
                .with_param("target", std::any::type_name::<T>())
                .into()
        })
    }
}

impl<V, T> Validate for Typed<V, T>
where
    V: Validate,
    V::Output: IntoFieldValue,
    T: DeserializeOwned,
{
    type Output = T;

    fn validate(&self, input: &Value) -> ValidationResult<T> {
        Self::convert(self.inner.validate(input)?)
    }

    fn validate_missing(&self) -> ValidationResult<T> {
        Self::convert(self.inner.validate_missing()?)
    }
}

impl<V: Clone, T> Clone for Typed<V, T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<V: fmt::Debug, T> fmt::Debug for Typed<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typed")
            .field("inner", &self.inner)
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}
