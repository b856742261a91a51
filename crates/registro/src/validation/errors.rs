//! Field error maps returned by the validation engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name to error message, in the order failures were found.
///
/// An empty map means the record can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: IndexMap<String, String>,
}

impl ErrorMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure unless the field already has one.
    ///
    /// Returns true if the message was stored.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) -> bool {
        let field = field.into();
        if self.errors.contains_key(&field) {
            return false;
        }
        self.errors.insert(field, message.into());
        true
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Returns true if the field failed.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Returns true if no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Names of the failed fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = ErrorMap::new();
        assert!(errors.add("email", "Email es requerido"));
        assert!(!errors.add("email", "Email inválido"));
        assert_eq!(errors.get("email"), Some("Email es requerido"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut errors = ErrorMap::new();
        errors.add("placa", "Placa inválida");
        errors.add("color", "Color es requerido");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"placa":"Placa inválida","color":"Color es requerido"}"#);
    }
}
