//! Validator performance benchmarks.
//!
//! Measures rule evaluation per section, normalization, and batch throughput.

use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use registro::{Record, Section, normalize, validate};
use serde_json::json;

/// A complete person record.
fn personal_record() -> Record {
    Record::from_json(json!({
        "primer_nombre": "Ana",
        "primer_apellido": "Ruiz",
        "fecha_nacimiento": "2000-01-01",
        "sexo": {"value": 1, "label": "Masculino"},
        "email": "a@b.com",
        "celular": 3001234567u64,
        "salario": 1000000,
        "cedula": 123456
    }))
    .unwrap()
}

/// A housing record with option pairs and numeric text.
fn housing_record() -> Record {
    Record::from_json(json!({
        "id_persona": {"value": "9", "label": "(123456) Ana Ruiz"},
        "id_municipio": {"value": 1, "label": "Medellín"},
        "direccion": "Calle 10 # 4-21",
        "barrio": "El Poblado",
        "pisos": "2",
        "area_construida": "120",
        "area_total": "90",
        "habitaciones": "3",
        "baños": "2",
        "estrato": "4",
        "tipo": {"value": "Casa", "label": "Casa"}
    }))
    .unwrap()
}

/// Benchmark single-record validation.
fn bench_single_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_validation");
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let personal = personal_record();
    let housing = housing_record();

    group.bench_function("personal_valid", |b| {
        b.iter(|| black_box(validate(&personal, Section::Personal, now)))
    });

    group.bench_function("housing_valid", |b| {
        b.iter(|| black_box(validate(&housing, Section::Housing, now)))
    });

    group.bench_function("empty_record_all_sections", |b| {
        let empty = Record::new();
        b.iter(|| {
            for section in Section::all() {
                black_box(validate(&empty, *section, now));
            }
        })
    });

    group.finish();
}

/// Benchmark payload normalization.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");
    let housing = housing_record();

    group.bench_function("housing", |b| {
        b.iter(|| black_box(normalize(&housing, Section::Housing)))
    });

    group.finish();
}

/// Benchmark validation of growing batches.
fn bench_batch_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_scaling");
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    for size in [10, 100, 1000].iter() {
        let batch: Vec<Record> = (0..*size)
            .map(|i| personal_record().with("cedula", 100000 + i))
            .collect();

        group.bench_with_input(BenchmarkId::new("personal", size), &batch, |b, batch| {
            b.iter(|| {
                for record in batch {
                    black_box(validate(record, Section::Personal, now));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_validation,
    bench_normalization,
    bench_batch_scaling,
);
criterion_main!(benches);
