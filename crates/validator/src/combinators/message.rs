//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Validate, ValidationErrors, ValidationResult};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// Only errors reported at the validator's own path are rewritten. Errors
/// from nested fields keep their messages, so wrapping an object does not
/// blur which field failed.
///
/// # Examples
///
/// ```rust,ignore
/// use conform_validator::prelude::*;
///
/// let validator = email().with_message("please enter a valid email address");
///
/// let errors = validator.validate(&json!("nope")).unwrap_err();
/// assert_eq!(errors.errors()[0].message, "please enter a valid email address");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the custom code, if set.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn rewrite(&self, mut errors: ValidationErrors) -> ValidationErrors {
        for error in errors.iter_mut().filter(|error| error.path.is_root()) {
            error.message.clone_from(&self.message);
            if let Some(code) = &self.code {
                error.code.clone_from(code);
            }
        }
        errors
    }
}

impl<V: Validate> Validate for WithMessage<V> {
    type Output = V::Output;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        self.inner.validate(input).map_err(|errors| self.rewrite(errors))
    }

    fn validate_missing(&self) -> ValidationResult<Self::Output> {
        self.inner
            .validate_missing()
            .map_err(|errors| self.rewrite(errors))
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

// ============================================================================
// TESTS
// ============================================================================
