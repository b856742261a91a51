//! Field values as they arrive from the registry forms.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single field value.
///
/// Forms produce either raw scalars or `{value, label}` option pairs for
/// dropdown selections; both shapes are accepted for the same field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit `null` (or an unsupported JSON shape such as an array).
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Free text, possibly numeric text typed into an input.
    Text(String),
    /// Dropdown selection referencing another entity.
    Choice(OptionPair),
}

/// A `{value, label}` pair produced by a dropdown selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionPair {
    /// Selected identifier; `None` when nothing was selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<FieldValue>>,
    /// Display text shown in the dropdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Scalar view of a present field value.
///
/// Every rule reads fields through this type, so option pairs never reach
/// rule code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Number(f64),
    Text(&'a str),
}

impl FieldValue {
    /// Build an option pair.
    pub fn choice(value: impl Into<FieldValue>, label: impl Into<String>) -> Self {
        FieldValue::Choice(OptionPair {
            value: Some(Box::new(value.into())),
            label: Some(label.into()),
        })
    }

    /// Unwrap the value to a scalar.
    ///
    /// Returns `None` when the field counts as absent: `null`, an empty
    /// string, or an option pair without a `value`. A selected option is
    /// present even when its value is an empty string; the remaining rules
    /// judge that text.
    pub fn scalar(&self) -> Option<Scalar<'_>> {
        match self {
            FieldValue::Null => None,
            FieldValue::Bool(b) => Some(Scalar::Bool(*b)),
            FieldValue::Number(n) => Some(Scalar::Number(*n)),
            FieldValue::Text(s) if s.is_empty() => None,
            FieldValue::Text(s) => Some(Scalar::Text(s)),
            FieldValue::Choice(pair) => match pair.value.as_deref()? {
                FieldValue::Text(s) => Some(Scalar::Text(s)),
                inner => inner.scalar(),
            },
        }
    }

    /// Returns true if the field holds a usable value.
    pub fn is_present(&self) -> bool {
        self.scalar().is_some()
    }

    /// Label of an option pair, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            FieldValue::Choice(pair) => pair.label.as_deref(),
            _ => None,
        }
    }
}

impl<'a> Scalar<'a> {
    /// Interpret the scalar as a finite number.
    ///
    /// Numeric text is parsed after trimming; booleans are never numeric.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Scalar::Number(n) => *n,
            Scalar::Text(s) => s.trim().parse::<f64>().ok()?,
            Scalar::Bool(_) => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Textual form of the scalar.
    ///
    /// Integral numbers render without a fractional part, so `3001234567.0`
    /// reads as `"3001234567"`.
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            Scalar::Text(s) => Cow::Borrowed(s),
            Scalar::Number(n) => Cow::Owned(format_number(n)),
            Scalar::Bool(b) => Cow::Owned(b.to_string()),
        }
    }

    /// Convert back into a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Number(n) => number_to_json(*n),
            Scalar::Text(s) => Value::String((*s).to_string()),
        }
    }
}

/// Render a number, dropping the fractional part when it is integral.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// JSON number for `n`, as an integer when integral.
pub(crate) fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Array(_) => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Null),
            Value::String(s) => FieldValue::Text(s),
            Value::Object(mut map) => {
                let value = map
                    .remove("value")
                    .filter(|v| !v.is_null())
                    .map(|v| Box::new(FieldValue::from(v)));
                let label = match map.remove("label") {
                    Some(Value::String(s)) => Some(s),
                    _ => None,
                };
                FieldValue::Choice(OptionPair { value, label })
            }
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(FieldValue::from)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_text_is_absent() {
        assert!(!FieldValue::from("").is_present());
        assert!(FieldValue::from(" ").is_present());
        assert!(!FieldValue::Null.is_present());
    }

    #[test]
    fn test_zero_and_false_are_present() {
        assert!(FieldValue::from(0).is_present());
        assert!(FieldValue::from(false).is_present());
    }

    #[test]
    fn test_option_pair_unwraps_to_value() {
        let v = FieldValue::choice(7, "Bogotá");
        assert_eq!(v.scalar(), Some(Scalar::Number(7.0)));
        assert_eq!(v.label(), Some("Bogotá"));

        let unselected = FieldValue::from(json!({"label": "Seleccione"}));
        assert!(!unselected.is_present());

        let null_value = FieldValue::from(json!({"value": null, "label": "x"}));
        assert!(!null_value.is_present());
    }

    #[test]
    fn test_selected_empty_option_is_present() {
        let v = FieldValue::from(json!({"value": "", "label": "Ninguno"}));
        assert!(v.is_present());
        assert_eq!(v.scalar(), Some(Scalar::Text("")));
    }

    #[test]
    fn test_numeric_text() {
        assert_eq!(Scalar::Text(" 42 ").as_number(), Some(42.0));
        assert_eq!(Scalar::Text("abc").as_number(), None);
        assert_eq!(Scalar::Text("NaN").as_number(), None);
        assert_eq!(Scalar::Bool(true).as_number(), None);
    }

    #[test]
    fn test_integral_numbers_render_without_fraction() {
        assert_eq!(Scalar::Number(3001234567.0).as_text(), "3001234567");
        assert_eq!(Scalar::Number(1.5).as_text(), "1.5");
    }

    #[test]
    fn test_deserialize_shapes() {
        let v: FieldValue = serde_json::from_value(json!({"value": "3", "label": "Tres"})).unwrap();
        assert_eq!(v.scalar(), Some(Scalar::Text("3")));

        let v: FieldValue = serde_json::from_value(json!([1, 2])).unwrap();
        assert_eq!(v, FieldValue::Null);
    }
}
