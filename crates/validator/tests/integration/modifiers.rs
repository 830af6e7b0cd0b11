//! Optional, default and refine behave consistently inside records.

use conform_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn profile() -> Object {
    object()
        .field("handle", string().refine(|s| s.starts_with('@'), "must start with @"))
        .field("website", url().optional())
        .field(
            "visibility",
            enumeration(["public", "private"])
                .unwrap()
                .default("public".to_owned())
                .unwrap(),
        )
        .build()
        .unwrap()
}

#[rstest]
#[case::missing(json!({"handle": "@ada"}))]
#[case::null(json!({"handle": "@ada", "website": null, "visibility": null}))]
fn absent_fields_take_their_absent_outputs(#[case] input: Value) {
    let output = profile().validate(&input).unwrap();
    assert_eq!(
        Value::Object(output),
        json!({"handle": "@ada", "visibility": "public"})
    );
}

#[test]
fn present_invalid_optional_is_an_error() {
    let errors = profile()
        .validate(&json!({"handle": "@ada", "website": "not a url"}))
        .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].path.to_string(), "website");
    assert_eq!(errors.errors()[0].message, "invalid url");
}

#[test]
fn present_invalid_default_is_an_error() {
    let errors = profile()
        .validate(&json!({"handle": "@ada", "visibility": "secret"}))
        .unwrap_err();
    assert_eq!(errors.errors()[0].code, "invalid_enum_value");
    assert_eq!(errors.errors()[0].path.to_string(), "visibility");
}

#[test]
fn refinement_runs_after_type_check() {
    let errors = profile().validate(&json!({"handle": 7})).unwrap_err();
    assert_eq!(errors.errors()[0].message, "expected string");

    let errors = profile().validate(&json!({"handle": "ada"})).unwrap_err();
    assert_eq!(errors.errors()[0].message, "must start with @");
    assert_eq!(errors.errors()[0].code, "custom");
}

#[test]
fn nullable_keeps_key_required() {
    let schema = object()
        .field("deletedAt", date_string().nullable())
        .build()
        .unwrap();

    let output = schema.validate(&json!({"deletedAt": null})).unwrap();
    assert!(!output.contains_key("deletedAt"));

    let errors = schema.validate(&json!({})).unwrap_err();
    assert_eq!(errors.errors()[0].code, "required");
}

#[test]
fn with_message_overrides_field_error() {
    let schema = object()
        .field("email", email().with_message("enter a valid address"))
        .build()
        .unwrap();
    let errors = schema.validate(&json!({"email": "x"})).unwrap_err();
    assert_eq!(errors.errors()[0].message, "enter a valid address");
    assert_eq!(errors.errors()[0].code, "invalid_email");
}

#[test]
fn optional_default_output_types() {
    let nickname: Option<String> = string().optional().validate_field(None).unwrap();
    assert_eq!(nickname, None);

    let retries: i64 = integer().default(3).unwrap().validate_field(None).unwrap();
    assert_eq!(retries, 3);
}

#[test]
fn pattern_in_record() {
    let schema = object()
        .field("sku", pattern("^[A-Z]{3}-[0-9]{4}$").unwrap())
        .build()
        .unwrap();
    assert!(schema.validate(&json!({"sku": "ABC-1234"})).is_ok());

    let errors = schema.validate(&json!({"sku": "abc"})).unwrap_err();
    assert_eq!(errors.errors()[0].path.to_string(), "sku");
}
