//! The `Application` contract: a creator's application to a project.

use std::sync::LazyLock;

use conform_validator::combinators::{Object, Typed};
use conform_validator::foundation::{SchemaError, ValidateExt, ValidationResult};
use conform_validator::validators::{date_string, enumeration_of, string};
use conform_validator::{Schema, literals, validate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

literals! {
    /// Review state of an application.
    #[derive(Default)]
    pub enum ApplicationStatus {
        #[default]
        Pending = "pending",
        Approved = "approved",
        Rejected = "rejected",
    }
}

/// A validated application.
///
/// Mirrors [`application_schema`] field for field; `status` is always set
/// because the schema defaults it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub creator_id: String,
    pub project_id: String,
    pub status: ApplicationStatus,
    /// Date string exactly as submitted.
    pub submitted_at: String,
}

impl Application {
    /// Validates `input` against [`APPLICATION_SCHEMA`].
    pub fn parse(input: &Value) -> ValidationResult<Self> {
        validate(&*APPLICATION_SCHEMA, input)
    }
}

pub type ApplicationSchema = Schema<Typed<Object, Application>>;

/// Declares the `Application` schema.
pub fn application_schema() -> Result<ApplicationSchema, SchemaError> {
    let shape = Object::builder()
        .field("id", string())
        .field("creatorId", string())
        .field("projectId", string())
        .field(
            "status",
            enumeration_of::<ApplicationStatus>()?.default(ApplicationStatus::Pending)?,
        )
        .field("submittedAt", date_string())
        .build()?;

    Ok(Schema::new("Application", shape.typed()))
}

/// The process-wide `Application` schema.
///
/// Declared on first use; a misconfigured declaration aborts the process.
pub static APPLICATION_SCHEMA: LazyLock<ApplicationSchema> = LazyLock::new(|| {
    application_schema().unwrap_or_else(|err| {
        tracing::error!(schema = "Application", error = %err, "schema declaration failed");
        panic!("Application schema is misconfigured: {err}")
    })
});
