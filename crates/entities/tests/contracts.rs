//! Behaviour of the entity contracts as seen by an API handler.

use conform_entities::{
    APPLICATION_SCHEMA, Application, ApplicationStatus, CREATOR_SCHEMA, Creator,
};
use conform_validator::foundation::Validate;
use conform_validator::validate;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};

fn application() -> Value {
    json!({
        "id": "app_1",
        "creatorId": "cr_1",
        "projectId": "pr_1",
        "status": "pending",
        "submittedAt": "2024-01-01T00:00:00Z",
    })
}

fn creator() -> Value {
    json!({
        "id": "cr_1",
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "avatarUrl": "https://cdn.example.com/ada.png",
    })
}

fn paths(errors: &conform_validator::foundation::ValidationErrors) -> Vec<String> {
    errors.iter().map(|e| e.path.to_string()).collect()
}

// ============================================================================
// APPLICATION
// ============================================================================

#[test]
fn application_valid_output_equals_input() {
    let output = validate(&*APPLICATION_SCHEMA, &application()).unwrap();
    assert_eq!(serde_json::to_value(output).unwrap(), application());
}

#[test]
fn missing_status_defaults_to_pending() {
    let mut input = application();
    input.as_object_mut().unwrap().remove("status");

    let output = Application::parse(&input).unwrap();
    assert_eq!(output.status, ApplicationStatus::Pending);
}

#[rstest]
#[case("approved", ApplicationStatus::Approved)]
#[case("rejected", ApplicationStatus::Rejected)]
fn present_status_kept(#[case] literal: &str, #[case] expected: ApplicationStatus) {
    let mut input = application();
    input["status"] = json!(literal);
    assert_eq!(Application::parse(&input).unwrap().status, expected);
}

#[rstest]
#[case::unknown(json!("archived"))]
#[case::wrong_case(json!("Pending"))]
#[case::not_a_string(json!(1))]
fn status_outside_set_rejected_at_status(#[case] status: Value) {
    let mut input = application();
    input["status"] = status;

    let errors = Application::parse(&input).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(paths(&errors), ["status"]);
    assert_eq!(errors.errors()[0].code, "invalid_enum_value");
}

#[test]
fn bad_submitted_at_rejected_with_invalid_date() {
    let mut input = application();
    input["submittedAt"] = json!("not-a-date");

    let errors = Application::parse(&input).unwrap_err();
    assert_eq!(paths(&errors), ["submittedAt"]);
    assert_eq!(errors.errors()[0].message, "invalid date");
}

#[test]
fn submitted_at_preserved_verbatim() {
    let mut input = application();
    input["submittedAt"] = json!("2024-01-01T08:00:00+08:00");
    assert_eq!(
        Application::parse(&input).unwrap().submitted_at,
        "2024-01-01T08:00:00+08:00"
    );
}

#[test]
fn two_violations_yield_exactly_two_errors() {
    let mut input = application();
    input["status"] = json!("archived");
    input["submittedAt"] = json!("not-a-date");

    let errors = Application::parse(&input).unwrap_err();
    assert_eq!(paths(&errors), ["status", "submittedAt"]);
}

#[test]
fn empty_record_reports_every_required_field() {
    let errors = Application::parse(&json!({})).unwrap_err();
    assert_eq!(paths(&errors), ["id", "creatorId", "projectId", "submittedAt"]);
    assert!(errors.iter().all(|e| e.code == "required"));
}

#[test]
fn non_object_rejected_at_root() {
    let errors = Application::parse(&json!(["app_1"])).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.errors()[0].path.is_root());
    assert_eq!(errors.errors()[0].message, "expected object");
}

// ============================================================================
// CREATOR
// ============================================================================

#[test]
fn creator_valid_output_equals_input() {
    let output = Creator::parse(&creator()).unwrap();
    assert_eq!(serde_json::to_value(output).unwrap(), creator());
}

#[rstest]
#[case::missing(None)]
#[case::null(Some(Value::Null))]
fn absent_avatar_omitted_from_output(#[case] avatar: Option<Value>) {
    let mut input = creator();
    match avatar {
        Some(value) => input["avatarUrl"] = value,
        None => {
            input.as_object_mut().unwrap().remove("avatarUrl");
        }
    }

    let output = CREATOR_SCHEMA.validator().inner().validate(&input).unwrap();
    assert!(!output.contains_key("avatarUrl"));
}

#[rstest]
#[case("not-an-email", false)]
#[case("a@b.com", true)]
fn email_format(#[case] email: &str, #[case] accepted: bool) {
    let mut input = creator();
    input["email"] = json!(email);

    match Creator::parse(&input) {
        Ok(output) => {
            assert!(accepted);
            assert_eq!(output.email, email);
        }
        Err(errors) => {
            assert!(!accepted);
            assert_eq!(paths(&errors), ["email"]);
            assert_eq!(errors.errors()[0].message, "invalid email");
        }
    }
}

#[test]
fn unknown_keys_ignored() {
    let mut input = creator();
    input["followers"] = json!(1200);

    let output = CREATOR_SCHEMA.validator().inner().validate(&input).unwrap();
    assert!(!output.contains_key("followers"));
    assert!(Creator::parse(&input).is_ok());
}

#[test]
fn summary_for_notifications() {
    let errors = Creator::parse(&json!({"id": "cr_1", "name": 7, "email": "x"})).unwrap_err();
    assert_eq!(errors.summary(), "name: expected string (and 1 more)");
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn validation_is_idempotent(
        id in "[a-z0-9_]{1,12}",
        status in prop_oneof![Just("pending"), Just("approved"), Just("archived")],
        day in 1_u32..=28,
    ) {
        let input = json!({
            "id": id,
            "creatorId": "cr_1",
            "projectId": "pr_1",
            "status": status,
            "submittedAt": format!("2024-02-{day:02}"),
        });
        prop_assert_eq!(Application::parse(&input), Application::parse(&input));
    }

    #[test]
    fn validated_output_revalidates_to_itself(
        name in "[A-Za-z ]{1,20}",
        with_avatar in any::<bool>(),
    ) {
        let mut input = creator();
        input["name"] = json!(name);
        if !with_avatar {
            input.as_object_mut().unwrap().remove("avatarUrl");
        }

        let first = Creator::parse(&input).unwrap();
        let second = Creator::parse(&serde_json::to_value(&first).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }
}
