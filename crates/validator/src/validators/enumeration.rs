//! Enumeration-of-literals validators
//!
//! An [`Enumeration`] accepts exactly the string literals it was declared
//! with and produces the value paired with the matched literal: the literal
//! itself for [`enumeration`], or an enum variant for [`enumeration_of`].

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::foundation::{SchemaError, Validate, ValidationError, ValidationResult};

// ============================================================================
// LITERAL SET
// ============================================================================

/// A closed set of string literals backed by a Rust type.
///
/// Usually implemented through [`literals!`](crate::literals).
pub trait LiteralSet: Copy + Eq + fmt::Debug + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The literal this member stands for.
    fn literal(&self) -> &'static str;
}

// ============================================================================
// ENUMERATION VALIDATOR
// ============================================================================

/// Accepts one of a fixed, ordered set of string literals.
///
/// Matching is by value and case-sensitive.
///
/// # Examples
///
/// ```rust,ignore
/// use conform_validator::prelude::*;
///
/// let status = enumeration(["pending", "approved", "rejected"])?;
/// assert_eq!(status.validate(&json!("approved"))?, "approved");
/// assert!(status.validate(&json!("archived")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration<T> {
    members: Vec<(Cow<'static, str>, T)>,
}

impl<T> Enumeration<T> {
    fn from_members(members: Vec<(Cow<'static, str>, T)>) -> Result<Self, SchemaError> {
        if members.is_empty() {
            return Err(SchemaError::EmptyEnumeration);
        }
        for (i, (literal, _)) in members.iter().enumerate() {
            if members[..i].iter().any(|(seen, _)| seen == literal) {
                return Err(SchemaError::DuplicateLiteral(literal.to_string()));
            }
        }
        Ok(Self { members })
    }

    /// The accepted literals, in declaration order.
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(literal, _)| literal.as_ref())
    }

    /// Returns `true` if `literal` is a member.
    pub fn contains(&self, literal: &str) -> bool {
        self.literals().any(|member| member == literal)
    }
}

impl Enumeration<String> {
    /// Declares a set of plain string literals.
    pub fn new<I, S>(literals: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let members = literals
            .into_iter()
            .map(|literal| {
                let literal = literal.into();
                let output = literal.to_string();
                (literal, output)
            })
            .collect();
        Self::from_members(members)
    }
}

impl<T: LiteralSet> Enumeration<T> {
    /// Declares the set of every member of `T`.
    pub fn of() -> Result<Self, SchemaError> {
        Self::from_members(
            T::ALL
                .iter()
                .map(|member| (Cow::Borrowed(member.literal()), *member))
                .collect(),
        )
    }
}

impl<T: Clone> Validate for Enumeration<T> {
    type Output = T;

    fn validate(&self, input: &Value) -> ValidationResult<T> {
        input
            .as_str()
            .and_then(|candidate| {
                self.members
                    .iter()
                    .find(|(literal, _)| literal == candidate)
            })
            .map(|(_, output)| output.clone())
            .ok_or_else(|| ValidationError::invalid_enum_value(self.literals(), input).into())
    }
}

/// Creates an enumeration over string literals.
///
/// Fails on an empty set or a repeated literal.
pub fn enumeration<I, S>(literals: I) -> Result<Enumeration<String>, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    Enumeration::new(literals)
}

/// Creates an enumeration producing members of `T`.
pub fn enumeration_of<T: LiteralSet>() -> Result<Enumeration<T>, SchemaError> {
    Enumeration::of()
}

// ============================================================================
// TESTS
// ============================================================================
