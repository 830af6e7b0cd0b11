//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `ValidateExt`, `IntoFieldValue`
//! - **Errors**: `ValidationError`, `ValidationErrors`, `SchemaError`
//! - **Paths**: `Path`, `PathSegment`
//!
//! # Architecture
//!
//! ## 1. Inferred output types
//!
//! Every validator names the type it produces for accepted input:
//!
//! ```rust,ignore
//! use conform_validator::prelude::*;
//!
//! // Optional<Str>::Output == Option<String>
//! let nickname = string().optional();
//! let value: Option<String> = nickname.validate_field(None)?;
//! ```
//!
//! ## 2. Composition
//!
//! Modifiers wrap a validator and return a new one:
//!
//! ```rust,ignore
//! let status = enumeration(["pending", "approved", "rejected"])?
//!     .default("pending".to_owned())?;
//! ```
//!
//! ## 3. Errors as values
//!
//! Rejections are returned, never raised. Composites collect every failure
//! and prefix it with the path segment of the field or element that failed:
//!
//! ```rust,ignore
//! let errors = schema.validate(&input).unwrap_err();
//! for error in &errors {
//!     println!("{}: {}", error.path, error.message);
//! }
//! ```

pub mod error;
pub mod path;
pub mod traits;

pub use error::{SchemaError, ValidationError, ValidationErrors, kind_of};
pub use path::{Path, PathSegment};
pub use traits::{IntoFieldValue, Validate, ValidateExt};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The result of validating one value: its typed output or every failure.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with a single validator.
///
/// This is a convenience function for one-off validations.
///
/// # Examples
///
/// ```rust,ignore
/// use conform_validator::foundation::validate_value;
///
/// let email = validate_value(&json!("a@b.com"), &email())?;
/// ```
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &serde_json::Value, validator: &V) -> ValidationResult<V::Output>
where
    V: Validate + ?Sized,
{
    validator.validate(value)
}
