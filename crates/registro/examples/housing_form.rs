//! Example: the housing form's submit path.
//!
//! Validates a housing record, prints the field errors if any, and otherwise
//! prints the payload for the housing table and the owner row.
//!
//! Usage:
//!   cargo run --example housing_form

use chrono::Utc;
use serde_json::json;

use registro::{OwnerLink, Record, Section, normalize, validate};

fn main() -> registro::Result<()> {
    let record = Record::from_json(json!({
        "id_persona": {"value": 9, "label": "(123456) Ana Ruiz"},
        "id_municipio": {"value": 1, "label": "Medellín"},
        "direccion": "Calle 10 # 4-21",
        "barrio": "El Poblado",
        "pisos": "2",
        "area_construida": "120",
        "area_total": "90",
        "habitaciones": "3",
        "baños": "2",
        "estrato": "7",
        "tipo": {"value": "Casa", "label": "Casa"}
    }))?;

    let errors = validate(&record, Section::Housing, Utc::now());
    if !errors.is_empty() {
        println!("## Errors");
        for (field, message) in errors.iter() {
            println!("  {:16} {}", field, message);
        }
        println!();
    }

    let fixed = record.with("estrato", 4);
    if validate(&fixed, Section::Housing, Utc::now()).is_empty() {
        // The owner lives in its own table, keyed by the new housing id.
        let mut payload = normalize(&fixed, Section::Housing);
        payload.shift_remove("id_persona");
        let owner = OwnerLink::from_housing(&fixed, 101)?;

        println!("## Vivienda");
        println!("{}", serde_json::to_string_pretty(&payload)?);
        println!("## Persona_Vivienda");
        println!("{}", serde_json::to_string_pretty(&owner)?);
    }

    Ok(())
}
