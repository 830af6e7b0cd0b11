//! The `Creator` contract.

use std::sync::LazyLock;

use conform_validator::combinators::{Object, Typed};
use conform_validator::foundation::{SchemaError, ValidateExt, ValidationResult};
use conform_validator::validators::{email, string, url};
use conform_validator::{Schema, validate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated creator profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Creator {
    /// Validates `input` against [`CREATOR_SCHEMA`].
    pub fn parse(input: &Value) -> ValidationResult<Self> {
        validate(&*CREATOR_SCHEMA, input)
    }
}

pub type CreatorSchema = Schema<Typed<Object, Creator>>;

/// Declares the `Creator` schema.
pub fn creator_schema() -> Result<CreatorSchema, SchemaError> {
    let shape = Object::builder()
        .field("id", string())
        .field("name", string())
        .field("email", email())
        .field("avatarUrl", url().optional())
        .build()?;

    Ok(Schema::new("Creator", shape.typed()))
}

/// The process-wide `Creator` schema.
pub static CREATOR_SCHEMA: LazyLock<CreatorSchema> = LazyLock::new(|| {
    creator_schema().unwrap_or_else(|err| {
        tracing::error!(schema = "Creator", error = %err, "schema declaration failed");
        panic!("Creator schema is misconfigured: {err}")
    })
});
