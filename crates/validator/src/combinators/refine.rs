//! REFINE combinator - a predicate layered on top of a validator

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, ValidationResult};

/// Runs `inner`, then checks its output against `predicate`.
///
/// The predicate is never consulted for input `inner` rejected, so the two
/// failure modes stay distinguishable: a non-string fed to
/// `string().refine(..)` reports `"expected string"`, not the refinement
/// message.
///
/// # Examples
///
/// ```rust,ignore
/// use conform_validator::prelude::*;
///
/// let handle = string().refine(|s| s.starts_with('@'), "must start with @");
/// assert!(handle.validate(&json!("@ada")).is_ok());
/// assert!(handle.validate(&json!("ada")).is_err());
/// ```
#[derive(Clone)]
pub struct Refine<V, F> {
    inner: V,
    predicate: F,
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl<V, F> Refine<V, F> {
    /// Creates a refinement reporting code `"custom"`.
    pub fn new(inner: V, predicate: F, message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_code(inner, predicate, "custom", message)
    }

    /// Creates a refinement with an explicit error code.
    pub fn with_code(
        inner: V,
        predicate: F,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            inner,
            predicate,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn check<T>(&self, output: T) -> ValidationResult<T>
    where
        F: Fn(&T) -> bool,
    {
        if (self.predicate)(&output) {
            Ok(output)
        } else {
            Err(ValidationError::new(self.code.clone(), self.message.clone()).into())
        }
    }
}

impl<V, F> Validate for Refine<V, F>
where
    V: Validate,
    F: Fn(&V::Output) -> bool,
{
    type Output = V::Output;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        self.check(self.inner.validate(input)?)
    }

    fn validate_missing(&self) -> ValidationResult<Self::Output> {
        self.check(self.inner.validate_missing()?)
    }
}

impl<V: fmt::Debug, F> fmt::Debug for Refine<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refine")
            .field("inner", &self.inner)
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
