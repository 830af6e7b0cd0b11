//! Property-based tests for conform-validator.

use conform_validator::prelude::*;
use proptest::prelude::*;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        ".{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn record() -> Object {
    object()
        .field("id", string())
        .field("email", email())
        .field("site", url().optional())
        .field(
            "state",
            enumeration(["open", "closed"])
                .unwrap()
                .default("open".to_owned())
                .unwrap(),
        )
        .field("at", date_string())
        .build()
        .unwrap()
}

// ============================================================================
// PURITY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validation_is_deterministic(input in arb_json()) {
        let schema = record();
        prop_assert_eq!(schema.validate(&input), schema.validate(&input));
    }

    #[test]
    fn email_is_deterministic(s in ".*") {
        let input = json!(s);
        prop_assert_eq!(email().validate(&input), email().validate(&input));
    }
}

// ============================================================================
// IDEMPOTENCE: an accepted output validates to itself
// ============================================================================

proptest! {
    #[test]
    fn accepted_output_is_a_fixed_point(
        id in "[a-z0-9]{1,8}",
        user in "[a-z]{1,8}",
        state in prop::option::of(prop_oneof![Just("open"), Just("closed")]),
        with_site in any::<bool>(),
    ) {
        let mut input = json!({
            "id": id,
            "email": format!("{user}@example.com"),
            "at": "2024-01-01",
        });
        if let Some(state) = state {
            input["state"] = json!(state);
        }
        if with_site {
            input["site"] = json!(format!("https://{user}.example.com"));
        }

        let schema = record();
        let first = Value::Object(schema.validate(&input).unwrap());
        let second = Value::Object(schema.validate(&first).unwrap());
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// AGGREGATION: one error per failing field, in declaration order
// ============================================================================

proptest! {
    #[test]
    fn every_failing_field_reported_once(
        bad_id in any::<bool>(),
        bad_email in any::<bool>(),
        bad_at in any::<bool>(),
    ) {
        let id = if bad_id { json!(1) } else { json!("x") };
        let email = if bad_email { "nope" } else { "a@b.com" };
        let at = if bad_at { "never" } else { "2024-01-01" };
        let input = json!({"id": id, "email": email, "at": at});

        let expected: Vec<&str> = [("id", bad_id), ("email", bad_email), ("at", bad_at)]
            .into_iter()
            .filter(|(_, bad)| *bad)
            .map(|(field, _)| field)
            .collect();

        match record().validate(&input) {
            Ok(_) => prop_assert!(expected.is_empty()),
            Err(errors) => {
                let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
                prop_assert_eq!(paths, expected);
            }
        }
    }
}

// ============================================================================
// OPTIONAL LAW: optional(v) agrees with v on every present, non-null value
// ============================================================================

proptest! {
    #[test]
    fn optional_agrees_with_inner_on_present_values(input in arb_json()) {
        prop_assume!(!input.is_null());
        let plain = url().validate(&input);
        let wrapped = url().optional().validate(&input);
        prop_assert_eq!(plain.map(Some), wrapped);
    }
}
