//! DEFAULT combinator - substitutes a value for absent input

use std::fmt;

use serde_json::Value;

use crate::foundation::{IntoFieldValue, SchemaError, Validate, ValidationResult};

/// Produces a fixed default when the input is absent (missing or `null`).
///
/// A present value is judged by the inner validator alone: an invalid value
/// is an error, never a silent fallback to the default.
pub struct DefaultValue<V: Validate> {
    inner: V,
    default: V::Output,
}

impl<V> DefaultValue<V>
where
    V: Validate,
    V::Output: Clone + IntoFieldValue,
{
    /// Wraps `inner`, checking up front that it accepts `default`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::InvalidDefault`] when the default is absent or rejected,
    /// e.g. a default literal outside its enumeration.
    pub fn new(inner: V, default: V::Output) -> Result<Self, SchemaError> {
        let Some(probe) = default.clone().into_field_value() else {
            return Err(SchemaError::InvalidDefault {
                value: "null".to_owned(),
                reason: "a default must be a value".to_owned(),
            });
        };
        if let Err(errors) = inner.validate(&probe) {
            return Err(SchemaError::InvalidDefault {
                value: probe.to_string(),
                reason: errors.summary(),
            });
        }
        Ok(Self { inner, default })
    }
}

impl<V: Validate> DefaultValue<V> {
    /// The value produced for absent input.
    pub fn default_value(&self) -> &V::Output {
        &self.default
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for DefaultValue<V>
where
    V: Validate,
    V::Output: Clone,
{
    type Output = V::Output;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        if input.is_null() {
            return Ok(self.default.clone());
        }
        self.inner.validate(input)
    }

    fn validate_missing(&self) -> ValidationResult<Self::Output> {
        Ok(self.default.clone())
    }
}

impl<V> Clone for DefaultValue<V>
where
    V: Validate + Clone,
    V::Output: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            default: self.default.clone(),
        }
    }
}

impl<V> fmt::Debug for DefaultValue<V>
where
    V: Validate + fmt::Debug,
    V::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultValue")
            .field("inner", &self.inner)
            .field("default", &self.default)
            .finish()
    }
}
