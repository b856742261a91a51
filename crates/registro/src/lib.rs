//! Registro: validation and normalization rules for civil registry records.
//!
//! Records arrive from data-entry forms as loose field maps (scalars, or
//! `{value, label}` pairs from dropdowns). Each record belongs to a
//! [`Section`] that selects the rule table applied to it. Validation
//! returns an [`ErrorMap`] of human-readable messages; an empty map means
//! the record can be written to storage.
//!
//! # Core Principles
//!
//! - **Pure**: validation reads nothing but its arguments, including the
//!   evaluation time
//! - **Declarative**: every section is a table of [`Rule`] records
//! - **Closed sections**: unknown section names never validate silently
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use registro::{validate, Record, Section};
//!
//! let record = Record::new().with("nombre", "X");
//! let errors = validate(&record, Section::Company, Utc::now());
//!
//! assert!(errors.contains("nombre"));
//! assert!(errors.contains("id_departamento_constitucion"));
//! ```

pub mod assignment;
pub mod error;
pub mod normalize;
pub mod record;
pub mod section;
pub mod validation;

pub use assignment::{OwnerLink, PersonSummary, available_candidates};
pub use error::{RegistroError, Result};
pub use normalize::normalize;
pub use record::{FieldValue, LoaderConfig, OptionPair, Record, RecordLoader, Scalar};
pub use section::Section;
pub use validation::{
    EngineConfig, ErrorMap, Rule, SectionRules, UnknownSectionPolicy, ValidationEngine,
    section_rules, validate,
};
