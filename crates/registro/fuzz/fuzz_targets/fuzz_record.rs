//! Fuzz target for record loading and validation.
//!
//! This fuzzer tests that:
//! 1. JSON and CSV record loading never panic on arbitrary input
//! 2. Validation and normalization never panic on whatever loads

#![no_main]

use chrono::{TimeZone, Utc};
use libfuzzer_sys::fuzz_target;
use registro::{RecordLoader, Section, normalize, validate};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let loader = RecordLoader::new();

    let mut records = loader.parse_csv(data).unwrap_or_default();
    if let Ok(text) = std::str::from_utf8(data) {
        records.extend(loader.parse_json(text).unwrap_or_default());
    }

    for record in &records {
        for section in Section::all() {
            let _ = validate(record, *section, now);
            let _ = normalize(record, *section);
        }
    }
});
