//! Integration tests for conform-validator.

mod modifiers;
mod object;
mod properties;
mod reports;
