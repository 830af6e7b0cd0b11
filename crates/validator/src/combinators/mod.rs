//! Combinators
//!
//! Wrappers that change how another validator treats absent values, refine
//! what it accepts, or compose validators into records and lists.
//!
//! # Modifiers
//!
//! - [`Optional`]: missing or `null` becomes `None`
//! - [`Nullable`]: `null` becomes `None`, the key stays required
//! - [`DefaultValue`]: missing or `null` becomes a fixed value
//! - [`Refine`]: a predicate over the accepted output
//! - [`WithMessage`]: a custom message for the validator's own errors
//!
//! # Composites
//!
//! - [`Object`]: named fields, every field checked
//! - [`Array`]: every element checked
//! - [`Typed`]: output deserialized into a companion type

pub mod array;
pub mod default;
pub mod message;
pub mod object;
pub mod optional;
pub mod refine;
pub mod typed;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use array::{Array, array};
pub use default::DefaultValue;
pub use message::{WithMessage, with_message};
pub use object::{Object, ObjectBuilder, UnknownKeys, object};
pub use optional::{Nullable, Optional, nullable, optional};
pub use refine::Refine;
pub use typed::Typed;
