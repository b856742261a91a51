//! Loading records from JSON and delimited files.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::error::{RegistroError, Result};
use super::record::Record;

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b',', b'\t', b';', b'|'];

/// Loader configuration.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Delimiter for CSV input (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum records to read (None = all).
    pub max_records: Option<usize>,
}

/// Reads records from files on disk.
pub struct RecordLoader {
    config: LoaderConfig,
}

impl RecordLoader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a JSON file holding either one record or an array of records.
    pub fn load_json(&self, path: impl AsRef<Path>) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| RegistroError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.parse_json(&contents)
    }

    /// Parse JSON text holding either one record or an array of records.
    pub fn parse_json(&self, text: &str) -> Result<Vec<Record>> {
        let document: Value = serde_json::from_str(text)?;
        let mut records = match document {
            Value::Array(items) => items
                .into_iter()
                .map(Record::from_json)
                .collect::<Result<Vec<_>>>()?,
            other => vec![Record::from_json(other)?],
        };
        if let Some(max) = self.config.max_records {
            records.truncate(max);
        }
        Ok(records)
    }

    /// Load a delimited file; the header row names the fields.
    pub fn load_csv(&self, path: impl AsRef<Path>) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|e| RegistroError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.parse_csv(&contents)
    }

    /// Parse delimited bytes; the header row names the fields.
    pub fn parse_csv(&self, bytes: &[u8]) -> Result<Vec<Record>> {
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes),
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();
        let mut records = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_records {
                if row_idx >= max {
                    break;
                }
            }
            let row = result?;
            records.push(Record::from_csv_row(&headers, &row));
        }

        tracing::debug!(
            records = records.len(),
            delimiter = %(delimiter as char).escape_default(),
            "parsed delimited records"
        );

        Ok(records)
    }
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the delimiter that occurs most consistently across the first lines.
fn detect_delimiter(bytes: &[u8]) -> u8 {
    let lines: Vec<String> = BufReader::new(bytes)
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let Some(&first_count) = counts.first() else {
            continue;
        };
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent { first_count * 1000 } else { first_count };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    best_delimiter
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter(b"a,b,c\n1,2,3"), b',');
        assert_eq!(detect_delimiter(b"a;b;c\n1;2;3"), b';');
        assert_eq!(detect_delimiter(b"a\tb\n1\t2"), b'\t');
    }

    #[test]
    fn test_quoted_delimiters_ignored() {
        assert_eq!(count_delimiter_in_line(r#""Calle 5, Sur",b"#, b','), 1);
    }

    #[test]
    fn test_parse_json_single_and_array() {
        let loader = RecordLoader::new();
        assert_eq!(loader.parse_json(r#"{"nombre": "X"}"#).unwrap().len(), 1);
        assert_eq!(loader.parse_json(r#"[{"a": 1}, {}, null]"#).unwrap().len(), 3);
        assert!(loader.parse_json("[1]").is_err());
        assert!(loader.parse_json("{").is_err());
    }

    #[test]
    fn test_parse_csv_with_limit() {
        let loader = RecordLoader::with_config(LoaderConfig {
            delimiter: None,
            max_records: Some(1),
        });
        let records = loader
            .parse_csv(b"nombre,media_salarial\nIngeniero,5000000\nPanadero,\n")
            .unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].is_present("media_salarial"));
    }
}
