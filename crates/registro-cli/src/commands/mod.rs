//! CLI command implementations.

pub mod normalize;
pub mod sections;
pub mod validate;

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use registro::{Record, RecordLoader, RegistroError};

use crate::cli::InputFormat;

/// Load records from a file, choosing the reader by format or extension.
pub fn load_records(file: &Path, format: InputFormat) -> Result<Vec<Record>, RegistroError> {
    let loader = RecordLoader::new();
    let format = match format {
        InputFormat::Auto => match file.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("tsv") => {
                InputFormat::Csv
            }
            _ => InputFormat::Json,
        },
        other => other,
    };

    tracing::debug!(file = %file.display(), %format, "loading records");

    match format {
        InputFormat::Csv => loader.load_csv(file),
        _ => loader.load_json(file),
    }
}

/// Resolve the evaluation time: RFC 3339, a bare date (midnight UTC), or now.
pub fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>, RegistroError> {
    let Some(text) = now else {
        return Ok(Utc::now());
    };
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| RegistroError::InvalidTimestamp(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_now_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_now(Some("2024-06-15")).unwrap(), expected);
        assert_eq!(parse_now(Some("2024-06-15T00:00:00Z")).unwrap(), expected);
        assert_eq!(
            parse_now(Some("2024-06-14T19:00:00-05:00")).unwrap(),
            expected
        );
        assert!(matches!(
            parse_now(Some("15/06/2024")),
            Err(RegistroError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_load_records_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("vehiculos.csv");
        std::fs::write(&csv_path, "nombre,placa\nSandero,ABC123\n").unwrap();
        let json_path = dir.path().join("vehiculo.txt");
        std::fs::write(&json_path, r#"{"nombre": "Sandero"}"#).unwrap();

        assert_eq!(load_records(&csv_path, InputFormat::Auto).unwrap().len(), 1);
        assert_eq!(load_records(&json_path, InputFormat::Auto).unwrap().len(), 1);
        assert!(load_records(&csv_path, InputFormat::Json).is_err());
    }
}
