//! Error reports as seen by callers: summaries, grouping and JSON shape.

use conform_validator::prelude::*;
use pretty_assertions::assert_eq;

fn signup() -> Schema<Object> {
    Schema::new(
        "Signup",
        object()
            .field("name", string())
            .field("email", email())
            .field("tags", array(string()))
            .build()
            .unwrap(),
    )
}

#[test]
fn summary_names_first_error_and_count() {
    let errors = validate(&signup(), &json!({"name": "Ada", "email": "x", "tags": [1, 2]}))
        .unwrap_err();
    assert_eq!(errors.summary(), "email: invalid email (and 2 more)");
}

#[test]
fn field_errors_group_by_rendered_path() {
    let errors = validate(&signup(), &json!({"email": 5, "tags": "a"})).unwrap_err();
    let fields = errors.field_errors();
    assert_eq!(fields["name"], ["required"]);
    assert_eq!(fields["email"], ["expected string"]);
    assert_eq!(fields["tags"], ["expected array"]);
}

#[test]
fn report_serializes_as_list() {
    let errors = validate(&signup(), &json!({"name": "Ada", "email": "a@b.com", "tags": [true]}))
        .unwrap_err();
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!([{
            "code": "invalid_type",
            "message": "expected string",
            "path": ["tags", 0],
            "params": [["expected", "string"], ["received", "boolean"]],
        }])
    );
}

#[test]
fn display_lists_every_error() {
    let errors = validate(&signup(), &json!({})).unwrap_err();
    let rendered = errors.to_string();
    assert!(rendered.starts_with("Validation failed with 3 error(s):"));
    assert!(rendered.contains("1. name: required"));
    assert!(rendered.contains("3. tags: required"));
}

#[test]
fn schema_errors_surface_at_build_time() {
    assert_eq!(enumeration(Vec::<String>::new()).unwrap_err(), SchemaError::EmptyEnumeration);
    assert!(matches!(
        enumeration(["a", "b"]).unwrap().default("c".to_owned()),
        Err(SchemaError::InvalidDefault { .. })
    ));
    assert_eq!(
        object().field("a", string()).field("a", string()).build().unwrap_err(),
        SchemaError::DuplicateField("a".to_owned())
    );
}

#[test]
fn every_builtin_code_is_reachable() {
    let schema = object()
        .field("name", string())
        .field("missing", string())
        .field("email", email())
        .field("site", url())
        .field("at", date_string())
        .field("sku", pattern("^[A-Z]+$").unwrap())
        .field("state", enumeration(["open"]).unwrap())
        .field("count", integer().refine(|n| *n > 0, "must be positive"))
        .strict()
        .build()
        .unwrap();

    let errors = schema
        .validate(&json!({
            "name": 1,
            "email": "x",
            "site": "x",
            "at": "x",
            "sku": "x",
            "state": "x",
            "count": 0,
            "extra": true,
        }))
        .unwrap_err();
    let codes: Vec<&str> = errors.iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(
        codes,
        [
            "invalid_type",
            "required",
            "invalid_email",
            "invalid_url",
            "invalid_date",
            "invalid_string",
            "invalid_enum_value",
            "custom",
            "unrecognized_keys",
        ]
    );
}
