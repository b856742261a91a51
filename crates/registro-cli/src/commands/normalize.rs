//! Normalize command - print storage payloads for valid records.

use std::path::PathBuf;

use registro::{Section, ValidationEngine, normalize};
use serde_json::Value;

use crate::cli::InputFormat;

pub fn run(
    file: PathBuf,
    section: String,
    format: InputFormat,
    now: Option<String>,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let section: Section = section.parse()?;
    let now = super::parse_now(now.as_deref())?;
    let records = super::load_records(&file, format)?;
    let engine = ValidationEngine::new();

    let mut payloads = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let errors = engine.validate(record, section, now);
        if !errors.is_empty() {
            let fields: Vec<_> = errors.fields().collect();
            return Err(format!(
                "record {} is not valid for {}: {}",
                idx + 1,
                section,
                fields.join(", ")
            )
            .into());
        }
        payloads.push(Value::Object(normalize(record, section)));
    }

    let output = if payloads.len() == 1 {
        payloads.remove(0)
    } else {
        Value::Array(payloads)
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
