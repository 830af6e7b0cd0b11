//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] — Create a unit validator (struct + `Validate` impl + factory fn)
//! - [`literals!`] — Declare a Rust enum usable as a typed enumeration
//!
//! # Examples
//!
//! ```rust,ignore
//! use conform_validator::validator;
//! use conform_validator::foundation::ValidationError;
//!
//! // Extracting validator: `Some(output)` accepts, `None` rejects
//! validator! {
//!     pub Boolean -> bool;
//!     extract(input) { input.as_bool() }
//!     error(input) { ValidationError::invalid_type("boolean", input) }
//!     fn boolean();
//! }
//!
//! // String format validator: the string check runs first
//! validator! {
//!     pub Slug for str;
//!     rule(input) { input.chars().all(|c| c.is_ascii_lowercase() || c == '-') }
//!     error(input) { ValidationError::new("invalid_slug", "invalid slug") }
//!     fn slug();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete unit validator: struct definition, `Validate`
/// implementation and factory function.
///
/// `#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]` is always
/// applied.
///
/// # Variants
///
/// **Extracting validator**: the `extract` block maps the input to
/// `Option<Output>`; `None` produces the `error` block's error.
/// ```rust,ignore
/// validator! {
///     pub Integer -> i64;
///     extract(input) { input.as_i64() }
///     error(input) { ValidationError::invalid_type("integer", input) }
///     fn integer();
/// }
/// ```
///
/// **String format validator**: non-strings are rejected with
/// `"expected string"` before `rule` runs; the output is the input string.
/// ```rust,ignore
/// validator! {
///     pub Email for str;
///     rule(input) { EMAIL_REGEX.is_match(input) }
///     error(input) { ValidationError::new("invalid_email", "invalid email") }
///     fn email();
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1: Extracting unit validator + factory fn ─────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident -> $output:ty;
        extract($inp:ident) $extract:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Output = $output;

            #[allow(unused_variables)]
            fn validate(
                &self,
                $inp: &$crate::__private::serde_json::Value,
            ) -> $crate::foundation::ValidationResult<$output> {
                match $extract {
                    ::core::option::Option::Some(output) => ::core::result::Result::Ok(output),
                    ::core::option::Option::None => {
                        let $einp = $inp;
                        ::core::result::Result::Err(::core::convert::Into::into($err))
                    }
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Variant 2: String format unit validator + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for str;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Output = ::std::string::String;

            #[allow(unused_variables)]
            fn validate(
                &self,
                input: &$crate::__private::serde_json::Value,
            ) -> $crate::foundation::ValidationResult<::std::string::String> {
                let string = $crate::foundation::Validate::validate(&$crate::validators::Str, input)?;
                let $inp: &str = &string;
                if $rule {
                    ::core::result::Result::Ok(string)
                } else {
                    let $einp = $inp;
                    ::core::result::Result::Err(::core::convert::Into::into($err))
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };
}

// ============================================================================
// LITERALS MACRO
// ============================================================================

/// Declares a fieldless enum whose variants map one-to-one onto string
/// literals, for use with [`enumeration_of`](crate::validators::enumeration_of).
///
/// Generates `LiteralSet`, `IntoFieldValue`, `Display`, `Serialize` and
/// `Deserialize` implementations. `#[derive(Debug, Clone, Copy, PartialEq,
/// Eq, Hash)]` is always applied.
///
/// # Examples
///
/// ```rust,ignore
/// conform_validator::literals! {
///     /// Review state of an application.
///     pub enum Status {
///         Pending = "pending",
///         Approved = "approved",
///         Rejected = "rejected",
///     }
/// }
///
/// let status = enumeration_of::<Status>()?.default(Status::Pending)?;
/// ```
#[macro_export]
macro_rules! literals {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::validators::LiteralSet for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn literal(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal),+
                }
            }
        }

        impl $crate::foundation::IntoFieldValue for $name {
            fn into_field_value(self) -> ::core::option::Option<$crate::__private::serde_json::Value> {
                ::core::option::Option::Some($crate::__private::serde_json::Value::String(
                    ::std::string::ToString::to_string($crate::validators::LiteralSet::literal(&self)),
                ))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::validators::LiteralSet::literal(self))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str($crate::validators::LiteralSet::literal(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                const NAMES: &[&str] = &[$($literal),+];
                let literal: ::std::string::String =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                <Self as $crate::validators::LiteralSet>::ALL
                    .iter()
                    .copied()
                    .find(|candidate| $crate::validators::LiteralSet::literal(candidate) == literal)
                    .ok_or_else(|| {
                        <D::Error as $crate::__private::serde::de::Error>::unknown_variant(&literal, NAMES)
                    })
            }
        }
    };
}
