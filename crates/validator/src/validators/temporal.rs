//! Date-string refinement.
//!
//! A date string is a [`Str`] refined by a calendar parse. Accepted forms:
//! - RFC 3339 date-time: `2024-01-01T00:00:00Z`, `2024-01-01T08:30:00.250+02:00`
//! - Calendar date: `2024-01-01`
//! - Local date-time: `2024-01-01T00:00:00`, `2024-01-01T00:00:00.123`
//!
//! The string is returned verbatim; no timezone normalization happens here.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::combinators::Refine;
use crate::validators::Str;

/// `Str` refined by [`is_date`].
pub type DateString = Refine<Str, fn(&String) -> bool>;

/// Returns `true` if `input` parses as one of the accepted date forms.
pub fn is_date(input: &str) -> bool {
    DateTime::parse_from_rfc3339(input).is_ok()
        || NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}

/// Creates a date-string validator rejecting with `"invalid date"`.
pub fn date_string() -> DateString {
    let predicate: fn(&String) -> bool = |input| is_date(input);
    Refine::with_code(Str, predicate, "invalid_date", "invalid date")
}
