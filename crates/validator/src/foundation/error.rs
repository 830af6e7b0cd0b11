//! Error types for validation failures and schema construction
//!
//! Validation failures are plain values: a [`ValidationError`] carries a
//! stable `code`, a human-readable `message` and the [`Path`] of the failing
//! value. [`ValidationErrors`] is the ordered report returned by every
//! validator. Schema misconfiguration is a separate concern, reported once at
//! construction time through [`SchemaError`].

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::path::{Path, PathSegment};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure.
///
/// # Examples
///
/// ```rust,ignore
/// use conform_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("invalid_email", "invalid email").at("email");
/// assert_eq!(error.to_string(), "email: invalid email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Built-in codes: "invalid_type", "required", "invalid_email",
    /// "invalid_url", "invalid_date", "invalid_string" (pattern mismatch),
    /// "invalid_enum_value", "custom" (refinements), "unrecognized_keys",
    /// "output_mismatch".
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Location of the failing value, outermost segment first.
    pub path: Path,

    /// Ordered key/value context for message templating.
    ///
    /// Example: `[("expected", "string"), ("received", "number")]`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates an error at the root path.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: Path::root(),
            params: Vec::new(),
        }
    }

    /// Moves the error one level down: `segment` becomes the outermost step.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path.prepend(segment);
        self
    }

    /// Replaces the whole path.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_path(mut self, path: Path) -> Self {
        self.path = path;
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A required key was missing from the input.
    pub fn required() -> Self {
        Self::new("required", "required")
    }

    /// The value had the wrong dynamic type, e.g. `"expected string"`.
    pub fn invalid_type(expected: &'static str, received: &Value) -> Self {
        Self::new("invalid_type", format!("expected {expected}"))
            .with_param("expected", expected)
            .with_param("received", kind_of(received))
    }

    /// A caller-supplied refinement rejected the value.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// The value is not one of the accepted literals.
    pub fn invalid_enum_value<'a>(options: impl IntoIterator<Item = &'a str>, received: &Value) -> Self {
        let options = options
            .into_iter()
            .map(|option| format!("'{option}'"))
            .collect::<Vec<_>>()
            .join(" | ");
        Self::new("invalid_enum_value", format!("expected one of {options}"))
            .with_param("options", options)
            .with_param("received", received.to_string())
    }

    /// An object carried keys its schema does not declare.
    pub fn unrecognized_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let keys = keys
            .into_iter()
            .map(|key| format!("'{key}'"))
            .collect::<Vec<_>>()
            .join(", ");
        Self::new("unrecognized_keys", format!("unrecognized keys: {keys}"))
            .with_param("keys", keys)
    }
}

/// Name of a JSON value's dynamic type, as used in `invalid_type` errors.
#[must_use]
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The ordered error report of a rejected value.
///
/// Errors appear in the order validators produced them, which for objects
/// is field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Moves every error of `other` to the end of this collection.
    pub fn append(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Prepends `segment` to the path of every error.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(mut self, segment: impl Into<PathSegment>) -> Self {
        let segment = segment.into();
        for error in &mut self.errors {
            error.path.prepend(segment.clone());
        }
        self
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Mutable access for combinators that rewrite messages in place.
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, ValidationError> {
        self.errors.iter_mut()
    }

    /// `Ok(ok_value)` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }

    /// One-line description for notification surfaces.
    ///
    /// ```rust,ignore
    /// // "email: invalid email (and 1 more)"
    /// let line = errors.summary();
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        match self.errors.split_first() {
            None => String::from("no errors"),
            Some((first, [])) => first.to_string(),
            Some((first, rest)) => format!("{first} (and {} more)", rest.len()),
        }
    }

    /// Messages grouped by rendered path, for form surfaces.
    ///
    /// Errors at the root are keyed by the empty string.
    #[must_use]
    pub fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
        let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in &self.errors {
            fields
                .entry(error.path.to_string())
                .or_default()
                .push(error.message.to_string());
        }
        fields
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// SCHEMA ERROR
// ============================================================================

/// A misconfigured schema, detected while it is being built.
///
/// These are programmer errors: they never depend on validated input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// An enumeration was declared without literals.
    #[error("enumeration must declare at least one literal")]
    EmptyEnumeration,

    /// The same literal appears twice in one enumeration.
    #[error("literal '{0}' is declared more than once")]
    DuplicateLiteral(String),

    /// A default value is rejected by the validator it defaults.
    #[error("default value {value} is not accepted by its validator: {reason}")]
    InvalidDefault {
        /// The rejected default, rendered as JSON.
        value: String,
        /// Summary of the rejection.
        reason: String,
    },

    /// An object declares the same field twice.
    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),

    /// A pattern validator was given an invalid regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

// ============================================================================
// TESTS
// ============================================================================
