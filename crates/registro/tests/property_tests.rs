//! Property-based tests for the validation engine.
//!
//! Properties checked:
//! 1. **No panics**: arbitrary JSON field values never crash validation
//! 2. **Determinism**: same record and time always produce the same map
//! 3. **Presence**: only fields named by a rule can appear in the error map
//! 4. **Interchangeability**: option pairs validate like their inner value
//! 5. **Selection**: an option pair with a value always satisfies `Required`

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use serde_json::{Value, json};

use registro::{FieldValue, Record, Section, section_rules, validate};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

// =============================================================================
// Test Strategies
// =============================================================================

fn section() -> impl Strategy<Value = Section> {
    prop::sample::select(Section::all().to_vec())
}

/// Scalar JSON values of the kinds forms produce.
fn scalar_json() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e12f64..1.0e12).prop_map(|n| json!(n)),
        "[a-zA-Z0-9@. _/-]{0,20}".prop_map(Value::String),
        "[0-9]{1,12}".prop_map(Value::String),
        "(19|20)[0-9]{2}-(0[1-9]|1[0-2])-(0[1-9]|1[0-9]|2[0-8])".prop_map(Value::String),
    ]
}

/// Scalars, option pairs, and shapes forms never send.
fn field_json() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => scalar_json(),
        2 => (scalar_json(), "[A-Za-z ]{0,10}").prop_map(|(v, l)| json!({"value": v, "label": l})),
        1 => Just(json!({"label": "Seleccione"})),
        1 => prop::collection::vec(scalar_json(), 0..3).prop_map(Value::Array),
    ]
}

/// Field names drawn from the rule tables plus unrelated ones.
fn field_name() -> impl Strategy<Value = String> {
    let mut names: Vec<String> = Section::all()
        .iter()
        .flat_map(|s| section_rules(*s).rules.iter().map(|r| r.field.to_string()))
        .collect();
    names.push("nota".to_string());
    names.push("imagen".to_string());
    prop::sample::select(names)
}

fn record_json() -> impl Strategy<Value = Value> {
    prop::collection::vec((field_name(), field_json()), 0..16).prop_map(|fields| {
        Value::Object(fields.into_iter().collect())
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Validation never panics and is deterministic for a fixed time.
    #[test]
    fn validate_is_total_and_deterministic(doc in record_json(), section in section()) {
        let record = Record::from_json(doc).unwrap();
        let first = validate(&record, section, now());
        let second = validate(&record, section, now());
        prop_assert_eq!(first, second);
    }

    /// Every reported field is governed by some rule of the section, and
    /// every message is non-empty.
    #[test]
    fn errors_only_name_ruled_fields(doc in record_json(), section in section()) {
        let record = Record::from_json(doc).unwrap();
        let table = section_rules(section);
        let errors = validate(&record, section, now());
        for (field, message) in errors.iter() {
            prop_assert!(table.rules.iter().any(|r| r.field == field));
            prop_assert!(!message.is_empty());
        }
    }

    /// Absent required fields always report their presence message.
    #[test]
    fn absent_required_fields_are_reported(doc in record_json(), section in section()) {
        let record = Record::from_json(doc).unwrap();
        let errors = validate(&record, section, now());
        for rule in section_rules(section).rules.iter().filter(|r| r.is_required()) {
            if !record.is_present(rule.field) {
                prop_assert_eq!(errors.get(rule.field), Some(rule.message));
            }
        }
    }

    /// Wrapping a non-empty value in an option pair does not change the outcome.
    #[test]
    fn option_pairs_match_scalars(
        section in section(),
        value in scalar_json().prop_filter("empty text is absent only as a bare scalar", |v| v != &json!("")),
        idx in any::<prop::sample::Index>(),
    ) {
        let fields: Vec<_> = section_rules(section).rules.iter().map(|r| r.field).collect();
        let field = fields[idx.index(fields.len())];

        let plain = Record::new().with(field, FieldValue::from(value.clone()));
        let wrapped = Record::new().with(field, FieldValue::from(json!({"value": value, "label": "x"})));

        prop_assert_eq!(validate(&plain, section, now()), validate(&wrapped, section, now()));
    }

    /// A selected option is never reported as missing, whatever its value.
    #[test]
    fn selected_options_satisfy_required(
        section in section(),
        value in "[a-zA-Z0-9 ]{0,8}",
    ) {
        let table = section_rules(section);
        let record: Record = table
            .required_fields()
            .map(|f| (f, FieldValue::from(json!({"value": value.clone(), "label": "x"}))))
            .collect();
        let errors = validate(&record, section, now());
        for field in table.required_fields() {
            let required = table.rules_for(field).next().map(|r| r.message);
            prop_assert_ne!(errors.get(field), required);
        }
    }

    /// Estrato passes exactly on 1 through 6.
    #[test]
    fn estrato_range(estrato in -20i64..20) {
        let record = Record::new().with("estrato", estrato);
        let errors = validate(&record, Section::Housing, now());
        prop_assert_eq!(errors.contains("estrato"), !(1..=6).contains(&estrato));
    }
}
