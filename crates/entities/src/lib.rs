//! # conform-entities
//!
//! Data contracts for the two domain entities, `Application` and `Creator`.
//!
//! Each contract is a process-wide [`Schema`](conform_validator::Schema)
//! declared once on first use, paired with a hand-written companion struct
//! that is the inferred type of its validated output.
//!
//! ```rust,ignore
//! use conform_entities::{Application, ApplicationStatus};
//!
//! let application = Application::parse(&payload)?;
//! if application.status == ApplicationStatus::Pending {
//!     queue_for_review(application);
//! }
//! ```

pub mod application;
pub mod creator;

pub use application::{
    APPLICATION_SCHEMA, Application, ApplicationSchema, ApplicationStatus, application_schema,
};
pub use creator::{CREATOR_SCHEMA, Creator, CreatorSchema, creator_schema};
