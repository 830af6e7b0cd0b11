//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

use crate::combinators::{DefaultValue, Nullable, Optional, Refine, Typed, WithMessage};
use crate::foundation::{SchemaError, ValidationError, ValidationResult};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator judges an untrusted [`Value`] and either produces its
/// [`Output`](Validate::Output) or an ordered error report. `Output` is the
/// inferred type of the validator: typed code consumes it without further
/// checks.
///
/// Validators are pure. The same input always yields the same result.
///
/// # Examples
///
/// ```rust,ignore
/// use conform_validator::foundation::{Validate, ValidationError, ValidationResult};
/// use serde_json::Value;
///
/// struct NonEmptyString;
///
/// impl Validate for NonEmptyString {
///     type Output = String;
///
///     fn validate(&self, input: &Value) -> ValidationResult<String> {
///         match input.as_str() {
///             Some(s) if !s.is_empty() => Ok(s.to_owned()),
///             Some(_) => Err(ValidationError::custom("must not be empty").into()),
///             None => Err(ValidationError::invalid_type("string", input).into()),
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The value produced for accepted input.
    type Output;

    /// Validates a present value.
    fn validate(&self, input: &Value) -> ValidationResult<Self::Output>;

    /// Called instead of [`validate`](Validate::validate) when an object
    /// key is missing.
    ///
    /// Required by default; `Optional` and `DefaultValue` override it.
    fn validate_missing(&self) -> ValidationResult<Self::Output> {
        Err(ValidationError::required().into())
    }

    /// Dispatches to `validate` or `validate_missing`.
    fn validate_field(&self, input: Option<&Value>) -> ValidationResult<Self::Output> {
        match input {
            Some(value) => self.validate(value),
            None => self.validate_missing(),
        }
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Output = V::Output;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        (**self).validate(input)
    }

    fn validate_missing(&self) -> ValidationResult<Self::Output> {
        (**self).validate_missing()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Output = V::Output;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        (**self).validate(input)
    }

    fn validate_missing(&self) -> ValidationResult<Self::Output> {
        (**self).validate_missing()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing modifier methods for validators.
///
/// Every modifier consumes the validator and returns a new one; nothing is
/// mutated in place.
///
/// # Examples
///
/// ```rust,ignore
/// use conform_validator::prelude::*;
///
/// let avatar = url().optional();
/// let status = enumeration(["pending", "approved"])?.default("pending".to_owned())?;
/// let handle = string().refine(|s| s.starts_with('@'), "must start with @");
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Accepts a missing key or `null` as "no value".
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Accepts `null` as "no value" while still requiring the key.
    fn nullable(self) -> Nullable<Self> {
        Nullable::new(self)
    }

    /// Substitutes `value` when the key is missing or `null`.
    ///
    /// Fails if `value` is itself rejected by this validator.
    fn default(self, value: Self::Output) -> Result<DefaultValue<Self>, SchemaError>
    where
        Self::Output: Clone + IntoFieldValue,
    {
        DefaultValue::new(self, value)
    }

    /// Layers a predicate on top of this validator.
    ///
    /// The predicate only sees values this validator accepted.
    fn refine<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Refine<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Refine::new(self, predicate, message)
    }

    /// Replaces the message of errors reported at this validator's own path.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Deserializes the accepted value into a hand-written companion type.
    fn typed<T>(self) -> Typed<Self, T>
    where
        T: DeserializeOwned,
        Self::Output: IntoFieldValue,
    {
        Typed::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// FIELD VALUES
// ============================================================================

/// Converts a validator output back into a JSON value stored in a record.
///
/// `None` means "no value": the field is omitted from the record instead of
/// being written as `null`.
pub trait IntoFieldValue {
    /// Converts `self`, or returns `None` to omit the field.
    fn into_field_value(self) -> Option<Value>;
}

impl IntoFieldValue for Value {
    fn into_field_value(self) -> Option<Value> {
        Some(self)
    }
}

impl IntoFieldValue for String {
    fn into_field_value(self) -> Option<Value> {
        Some(Value::String(self))
    }
}

impl IntoFieldValue for bool {
    fn into_field_value(self) -> Option<Value> {
        Some(Value::Bool(self))
    }
}

impl IntoFieldValue for i64 {
    fn into_field_value(self) -> Option<Value> {
        Some(Value::from(self))
    }
}

impl IntoFieldValue for Number {
    fn into_field_value(self) -> Option<Value> {
        Some(Value::Number(self))
    }
}

impl IntoFieldValue for Map<String, Value> {
    fn into_field_value(self) -> Option<Value> {
        Some(Value::Object(self))
    }
}

impl<T: IntoFieldValue> IntoFieldValue for Option<T> {
    fn into_field_value(self) -> Option<Value> {
        self.and_then(IntoFieldValue::into_field_value)
    }
}

impl<T: IntoFieldValue> IntoFieldValue for Vec<T> {
    fn into_field_value(self) -> Option<Value> {
        Some(Value::Array(
            self.into_iter()
                .map(|item| item.into_field_value().unwrap_or(Value::Null))
                .collect(),
        ))
    }
}

// ============================================================================
// TESTS
// ============================================================================
