//! Primitive validators
//!
//! Type checks on a single JSON value. Each one produces the matching Rust
//! type and rejects every other dynamic type with `"expected <type>"`.

use serde_json::Value;

use crate::foundation::ValidationError;

crate::validator! {
    /// Accepts any string.
    pub Str -> String;
    extract(input) { input.as_str().map(str::to_owned) }
    error(input) { ValidationError::invalid_type("string", input) }
    fn string();
}

crate::validator! {
    /// Accepts `true` or `false`.
    pub Boolean -> bool;
    extract(input) { input.as_bool() }
    error(input) { ValidationError::invalid_type("boolean", input) }
    fn boolean();
}

crate::validator! {
    /// Accepts any JSON number, kept exactly as written: `3` stays an
    /// integer and large integers keep every digit.
    pub Number -> serde_json::Number;
    extract(input) { if let Value::Number(n) = input { Some(n.clone()) } else { None } }
    error(input) { ValidationError::invalid_type("number", input) }
    fn number();
}

crate::validator! {
    /// Accepts JSON numbers that fit an `i64` exactly.
    pub Integer -> i64;
    extract(input) { input.as_i64() }
    error(input) { ValidationError::invalid_type("integer", input) }
    fn integer();
}
