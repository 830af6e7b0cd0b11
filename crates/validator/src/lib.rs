//! # conform-validator
//!
//! Declarative schema validation with type inference for untrusted JSON.
//!
//! A schema is built once from primitives, modifiers and composites, then
//! applied any number of times. Every validator carries its output type, so
//! accepted input comes back as a typed value and rejected input comes back
//! as an ordered, path-annotated error report.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use conform_validator::prelude::*;
//!
//! let creator = Schema::new(
//!     "Creator",
//!     object()
//!         .field("id", string())
//!         .field("name", string())
//!         .field("email", email())
//!         .field("avatarUrl", url().optional())
//!         .build()?,
//! );
//!
//! let errors = validate(&creator, &json!({"id": "c1", "name": "Ada", "email": "nope"}))
//!     .unwrap_err();
//! assert_eq!(errors.summary(), "email: invalid email");
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for unit validators, [`literals!`] for typed
//! enumerations, or implement [`Validate`](foundation::Validate) manually.
//!
//! ## Built-in Validators
//!
//! - **Primitive**: [`string`](validators::string), [`boolean`](validators::boolean),
//!   [`number`](validators::number), [`integer`](validators::integer)
//! - **Format**: [`email`](validators::email), [`url`](validators::url),
//!   [`pattern`](validators::pattern)
//! - **Temporal**: [`date_string`](validators::date_string)
//! - **Enumeration**: [`enumeration`](validators::enumeration),
//!   [`enumeration_of`](validators::enumeration_of)
//!
//! ## Features
//!
//! - `formats` (default): email, URL and regex validators
//! - `temporal` (default): date-string validator

// ValidationErrors is returned by value from every validator; boxing it would
// add an allocation to the success path of nested objects.
#![allow(clippy::result_large_err)]
// Modifier chains (Typed<DefaultValue<Refine<..>>, ..>) are inherent to the
// inferred-output design.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;

pub use schema::{Schema, validate};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
