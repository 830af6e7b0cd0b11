//! Records: field aggregation, nesting and unknown keys.

use conform_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde::Deserialize;

fn order() -> Object {
    object()
        .field("id", string())
        .field("placedAt", date_string())
        .field(
            "customer",
            object()
                .field("email", email())
                .field("homepage", url().optional())
                .build()
                .unwrap(),
        )
        .field(
            "lines",
            array(
                object()
                    .field("sku", string())
                    .field("quantity", integer().refine(|n| *n > 0, "must be positive"))
                    .build()
                    .unwrap(),
            ),
        )
        .build()
        .unwrap()
}

fn paths(errors: &ValidationErrors) -> Vec<String> {
    errors.iter().map(|e| e.path.to_string()).collect()
}

#[test]
fn every_violation_reported_in_declaration_order() {
    let errors = order()
        .validate(&json!({
            "placedAt": "yesterday",
            "customer": {"email": "nope", "homepage": "also nope"},
            "lines": [
                {"sku": "A", "quantity": 1},
                {"sku": 2, "quantity": 0},
            ],
        }))
        .unwrap_err();

    assert_eq!(
        paths(&errors),
        [
            "id",
            "placedAt",
            "customer.email",
            "customer.homepage",
            "lines[1].sku",
            "lines[1].quantity",
        ]
    );
}

#[test]
fn path_segments_keep_key_and_index_kinds() {
    let errors = order()
        .validate(&json!({
            "id": "o1",
            "placedAt": "2024-01-01",
            "customer": {"email": "a@b.com"},
            "lines": [{"sku": "A", "quantity": -1}],
        }))
        .unwrap_err();

    assert_eq!(
        errors.errors()[0].path.segments(),
        [
            PathSegment::from("lines"),
            PathSegment::Index(0),
            PathSegment::from("quantity"),
        ]
    );
}

#[test]
fn accepted_record_round_trips() {
    let input = json!({
        "id": "o1",
        "placedAt": "2024-01-01T10:00:00Z",
        "customer": {"email": "a@b.com"},
        "lines": [{"sku": "A", "quantity": 2}],
    });
    let output = order().validate(&input).unwrap();
    assert_eq!(Value::Object(output), input);
}

#[test]
fn numeric_fields_round_trip_unchanged() {
    let schema = object()
        .field("price", number())
        .field("delta", number())
        .field("ratio", number())
        .field("total", number())
        .build()
        .unwrap();

    let input = json!({
        "price": 3,
        "delta": -12,
        "ratio": 0.75,
        "total": 9_007_199_254_740_993_u64,
    });
    let output = schema.validate(&input).unwrap();
    assert_eq!(Value::Object(output), input);
}

#[test]
fn strict_nested_object_reports_unknown_keys_at_its_path() {
    let schema = object()
        .field(
            "settings",
            object().field("theme", string()).strict().build().unwrap(),
        )
        .build()
        .unwrap();

    let errors = schema
        .validate(&json!({"settings": {"theme": "dark", "font": "mono"}}))
        .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].code, "unrecognized_keys");
    assert_eq!(errors.errors()[0].path.to_string(), "settings");
    assert_eq!(errors.errors()[0].param("keys"), Some("'font'"));
}

#[test]
fn typed_record_matches_companion_struct() {
    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Line {
        sku: String,
        quantity: i64,
    }

    let lines = array(
        object()
            .field("sku", string())
            .field("quantity", integer())
            .build()
            .unwrap()
            .typed::<Line>(),
    );

    let output = lines
        .validate(&json!([{"sku": "A", "quantity": 2}, {"sku": "B", "quantity": 1}]))
        .unwrap();
    assert_eq!(
        output,
        vec![
            Line {
                sku: "A".to_owned(),
                quantity: 2,
            },
            Line {
                sku: "B".to_owned(),
                quantity: 1,
            },
        ]
    );
}
