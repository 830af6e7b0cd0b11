//! Prelude module for convenient imports.
//!
//! Provides a single `use conform_validator::prelude::*;` import that brings
//! in the traits, validators, combinators and the `validate` entry point.
//!
//! # Examples
//!
//! ```rust,ignore
//! use conform_validator::prelude::*;
//!
//! let application = object()
//!     .field("id", string())
//!     .field("status", enumeration(["pending", "approved"])?.default("pending".to_owned())?)
//!     .field("submittedAt", date_string())
//!     .build()?;
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    IntoFieldValue, Path, PathSegment, SchemaError, Validate, ValidateExt, ValidationError,
    ValidationErrors, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    Array, DefaultValue, Nullable, Object, ObjectBuilder, Optional, Refine, Typed, UnknownKeys,
    WithMessage, array, nullable, object, optional, with_message,
};

// ============================================================================
// ENTRY POINT
// ============================================================================

pub use crate::schema::{Schema, validate};

pub use serde_json::{Value, json};
