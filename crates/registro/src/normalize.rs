//! Conversion of form records into storage payloads.
//!
//! The table store expects plain scalars: identifiers as integers, numeric
//! columns as numbers, and no dropdown labels.

use serde_json::{Map, Value};

use crate::record::{FieldValue, Record, Scalar, number_to_json};
use crate::section::Section;
use crate::validation::section_rules;

/// Build the storage payload for a record.
///
/// Option pairs are replaced by their selected value; identifier fields
/// (`id_*`) and fields with numeric range rules are coerced from numeric
/// text; digit-count fields keep their text; absent and blank values become
/// `null`. Field order is preserved.
pub fn normalize(record: &Record, section: Section) -> Map<String, Value> {
    let table = section_rules(section);

    record
        .iter()
        .map(|(name, value)| {
            let numeric = is_identifier(name) || table.is_numeric_field(name);
            (name.to_string(), normalize_value(value, numeric))
        })
        .collect()
}

fn normalize_value(value: &FieldValue, numeric: bool) -> Value {
    let Some(scalar) = value.scalar() else {
        return Value::Null;
    };

    if numeric && let Some(n) = scalar.as_number() {
        return number_to_json(n);
    }

    match scalar {
        Scalar::Text(s) if s.trim().is_empty() => Value::Null,
        Scalar::Text(s) => Value::String(s.trim().to_string()),
        other => other.to_json(),
    }
}

fn is_identifier(name: &str) -> bool {
    name == "id" || name.starts_with("id_")
}
