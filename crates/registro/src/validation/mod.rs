//! Validation engine for registry records.

mod engine;
mod errors;
mod rule;
mod sections;

pub use engine::{EngineConfig, SECTION_ERROR_KEY, UnknownSectionPolicy, ValidationEngine, validate};
pub use errors::ErrorMap;
pub use rule::{Bound, Check, Format, Rule};
pub use sections::{MAX_MEDIA_SALARIAL, SectionRules, section_rules};
