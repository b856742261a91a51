//! Referential bookkeeping done before a write: office candidates and
//! house-owner links.
//!
//! A person may govern one department and be mayor of one municipality at a
//! time, and every housing unit has exactly one owner row in the
//! person-housing table. The storage layer does not enforce either, so the
//! forms filter and build these records themselves.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{RegistroError, Result};
use crate::record::{FieldValue, Record};

/// The person columns needed to offer someone in a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: i64,
    pub cedula: String,
    pub primer_nombre: String,
    #[serde(default)]
    pub segundo_nombre: Option<String>,
    pub primer_apellido: String,
    #[serde(default)]
    pub segundo_apellido: Option<String>,
}

impl PersonSummary {
    /// Dropdown label: `(cedula) names surnames`, skipping missing parts.
    pub fn option_label(&self) -> String {
        let names = [
            Some(self.primer_nombre.as_str()),
            self.segundo_nombre.as_deref(),
            Some(self.primer_apellido.as_str()),
            self.segundo_apellido.as_deref(),
        ];
        let full_name = names
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        format!("({}) {}", self.cedula.trim(), full_name)
    }

    /// Option pair selecting this person.
    pub fn to_option(&self) -> FieldValue {
        FieldValue::choice(self.id, self.option_label())
    }
}

/// People eligible for a single-holder office.
///
/// `holders` lists the current holder of every office of that kind
/// (`None` for vacant ones). `current` is the holder of the record being
/// edited; that person stays selectable so the form can show its own value.
pub fn available_candidates<'a>(
    people: &'a [PersonSummary],
    holders: &[Option<i64>],
    current: Option<i64>,
) -> Vec<&'a PersonSummary> {
    let taken: HashSet<i64> = holders.iter().flatten().copied().collect();

    let candidates: Vec<_> = people
        .iter()
        .filter(|p| !taken.contains(&p.id) || Some(p.id) == current)
        .collect();

    tracing::debug!(
        people = people.len(),
        taken = taken.len(),
        candidates = candidates.len(),
        "filtered office candidates"
    );

    candidates
}

/// The person-housing row that marks a person as owner of a housing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerLink {
    pub id_persona: i64,
    pub id_vivienda: i64,
    #[serde(rename = "es_dueño")]
    pub es_dueno: bool,
}

impl OwnerLink {
    /// Build the owner row for a housing record once the unit has an id.
    pub fn from_housing(record: &Record, id_vivienda: i64) -> Result<Self> {
        let id_persona = integer_field(record, "id_persona")?;
        Ok(Self {
            id_persona,
            id_vivienda,
            es_dueno: true,
        })
    }
}

/// Read a field as an integer identifier, unwrapping option pairs.
pub fn integer_field(record: &Record, field: &str) -> Result<i64> {
    let scalar = record
        .scalar(field)
        .ok_or_else(|| RegistroError::MissingField(field.to_string()))?;

    match scalar.as_number() {
        Some(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => Ok(n as i64),
        _ => Err(RegistroError::InvalidField {
            field: field.to_string(),
            message: format!("expected an integer id, found '{}'", scalar.as_text()),
        }),
    }
}
