//! Named schemas and the `validate` entry point
//!
//! A [`Schema`] is a validator with a name. The name only shows up in logs:
//! every call to [`Schema::validate`] runs inside a `schema.validate` span,
//! and a rejection is logged at `debug` with the error count and summary.

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Validate, ValidationResult};

/// A named, reusable validator.
///
/// # Examples
///
/// ```rust,ignore
/// use conform_validator::prelude::*;
///
/// let creator = Schema::new(
///     "Creator",
///     object()
///         .field("id", string())
///         .field("email", email())
///         .build()?,
/// );
///
/// match validate(&creator, &input) {
///     Ok(record) => store(record),
///     Err(errors) => notify(errors.summary()),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Schema<V> {
    name: Cow<'static, str>,
    validator: V,
}

impl<V: Validate> Schema<V> {
    pub fn new(name: impl Into<Cow<'static, str>>, validator: V) -> Self {
        Self {
            name: name.into(),
            validator,
        }
    }

    /// The schema name used in log records.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Validates `input`, producing the typed value or every violation.
    ///
    /// # Errors
    ///
    /// The ordered [`ValidationErrors`](crate::foundation::ValidationErrors)
    /// report when `input` is rejected.
    pub fn validate(&self, input: &Value) -> ValidationResult<V::Output> {
        let _span = tracing::debug_span!("schema.validate", schema = %self.name).entered();

        let result = self.validator.validate(input);
        match &result {
            Ok(_) => tracing::trace!("input accepted"),
            Err(errors) => tracing::debug!(
                error_count = errors.len(),
                summary = %errors.summary(),
                "input rejected"
            ),
        }
        result
    }
}

impl<V: Validate> Validate for Schema<V> {
    type Output = V::Output;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        Self::validate(self, input)
    }

    fn validate_missing(&self) -> ValidationResult<Self::Output> {
        self.validator.validate_missing()
    }
}

/// Validates `input` against `schema`.
///
/// Pure: the same schema and input always give the same result, and
/// validating an accepted output again yields that output unchanged.
///
/// # Errors
///
/// Every violation found, in field declaration order.
pub fn validate<V: Validate>(schema: &Schema<V>, input: &Value) -> ValidationResult<V::Output> {
    schema.validate(input)
}
