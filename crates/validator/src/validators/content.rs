//! String format validators
//!
//! Validators for strings that must follow a well-known format.
//!
//! - **Email**: the WHATWG HTML "valid e-mail address" grammar. ASCII only,
//!   matched case-sensitively, no normalization.
//! - **Url**: the WHATWG URL Standard as implemented by the `url` crate. The
//!   string must be absolute and carry a host.
//!
//! Accepted strings are returned verbatim.

use std::borrow::Cow;
use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::{SchemaError, Validate, ValidationError, ValidationResult};
use crate::validators::Str;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .expect("email pattern compiles")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::new("invalid_email", "invalid email") }
    fn email();
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates absolute URLs with an authority, e.g. `https://cdn.example.com/a.png`.
    pub Url for str;
    rule(input) { ::url::Url::parse(input).is_ok_and(|url| url.has_host()) }
    error(input) { ValidationError::new("invalid_url", "invalid url") }
    fn url();
}

// ============================================================================
// PATTERN VALIDATOR
// ============================================================================

/// Validates that a string matches a regular expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: regex::Regex,
    message: Cow<'static, str>,
}

impl Pattern {
    /// Compiles `pattern`; an invalid expression is a schema error.
    pub fn new(pattern: &str) -> Result<Self, SchemaError> {
        let regex =
            regex::Regex::new(pattern).map_err(|e| SchemaError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            message: Cow::Owned(format!("must match pattern {pattern}")),
            regex,
        })
    }

    /// The compiled expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validate for Pattern {
    type Output = String;

    fn validate(&self, input: &Value) -> ValidationResult<String> {
        let string = Str.validate(input)?;
        if self.regex.is_match(&string) {
            Ok(string)
        } else {
            Err(ValidationError::new("invalid_string", self.message.clone())
                .with_param("pattern", self.regex.as_str().to_owned())
                .into())
        }
    }
}

/// Creates a [`Pattern`] validator.
pub fn pattern(pattern: &str) -> Result<Pattern, SchemaError> {
    Pattern::new(pattern)
}

// ============================================================================
// TESTS
// ============================================================================
