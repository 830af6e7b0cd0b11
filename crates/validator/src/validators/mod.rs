//! Built-in validators
//!
//! Leaf validators that judge a single JSON value.
//!
//! # Categories
//!
//! - **Primitive**: string, boolean, number, integer
//! - **Format** (`formats` feature): email, URL, regex pattern
//! - **Temporal** (`temporal` feature): date string
//! - **Enumeration**: one of a fixed set of string literals
//!
//! # Examples
//!
//! ```rust,ignore
//! use conform_validator::prelude::*;
//!
//! let name = string();
//! let contact = email();
//! let avatar = url().optional();
//! let submitted_at = date_string();
//! let status = enumeration(["pending", "approved", "rejected"])?;
//! ```

pub mod enumeration;
pub mod primitive;

#[cfg(feature = "formats")]
pub mod content;

#[cfg(feature = "temporal")]
pub mod temporal;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use enumeration::{Enumeration, LiteralSet, enumeration, enumeration_of};
pub use primitive::{Boolean, Integer, Number, Str, boolean, integer, number, string};

#[cfg(feature = "formats")]
pub use content::{Email, Pattern, Url, email, pattern, url};

#[cfg(feature = "temporal")]
pub use temporal::{DateString, date_string, is_date};
