//! OPTIONAL and NULLABLE combinators - values that may be absent

use serde_json::Value;

use crate::foundation::{Validate, ValidationResult};

// ============================================================================
// OPTIONAL
// ============================================================================

/// Accepts "absent" or any value the inner validator accepts.
///
/// A missing key and JSON `null` are both absent and produce `None`. A
/// present value is handed to the inner validator unchanged, errors included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    inner: V,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Optional<V> {
    type Output = Option<V::Output>;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        if input.is_null() {
            return Ok(None);
        }
        self.inner.validate(input).map(Some)
    }

    fn validate_missing(&self) -> ValidationResult<Self::Output> {
        Ok(None)
    }
}

pub fn optional<V>(validator: V) -> Optional<V> {
    Optional::new(validator)
}

// ============================================================================
// NULLABLE
// ============================================================================

/// Accepts `null` as "no value" but keeps the key itself required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nullable<V> {
    inner: V,
}

impl<V> Nullable<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validate> Validate for Nullable<V> {
    type Output = Option<V::Output>;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        if input.is_null() {
            return Ok(None);
        }
        self.inner.validate(input).map(Some)
    }

    fn validate_missing(&self) -> ValidationResult<Self::Output> {
        self.inner.validate_missing().map(Some)
    }
}

pub fn nullable<V>(validator: V) -> Nullable<V> {
    Nullable::new(validator)
}
