//! The rule interpreter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::section::Section;

use super::errors::ErrorMap;
use super::sections::section_rules;

/// Error map key used when the section itself cannot be resolved.
pub const SECTION_ERROR_KEY: &str = "_section";

/// What to do with a section name that matches no rule table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSectionPolicy {
    /// Report a `_section` error so the record cannot be submitted.
    #[default]
    FailClosed,
    /// Report no errors.
    Permissive,
}

/// Configuration for the validation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Handling of unrecognized section names in [`ValidationEngine::validate_named`].
    #[serde(default)]
    pub unknown_section: UnknownSectionPolicy,
}

/// Evaluates section rule tables against records.
///
/// The engine holds no per-call state and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    config: EngineConfig,
}

impl ValidationEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate a record against a section's rules.
    ///
    /// Presence rules run first. A field that fails presence gets only that
    /// message; otherwise the first failing rule in table order supplies it.
    pub fn validate(&self, record: &Record, section: Section, now: DateTime<Utc>) -> ErrorMap {
        let table = section_rules(section);
        let mut errors = ErrorMap::new();

        for rule in table.rules.iter().filter(|r| r.is_required()) {
            if !rule.passes(record, now) {
                errors.add(rule.field, rule.message);
            }
        }

        for rule in table.rules.iter().filter(|r| !r.is_required()) {
            if errors.contains(rule.field) {
                continue;
            }
            if !rule.passes(record, now) {
                tracing::trace!(section = %section, field = rule.field, check = %rule.check, "rule failed");
                errors.add(rule.field, rule.message);
            }
        }

        tracing::debug!(section = %section, fields = record.len(), errors = errors.len(), "validated record");
        errors
    }

    /// Validate against a section given by name.
    ///
    /// Unknown names produce a single `_section` error unless the engine is
    /// configured with [`UnknownSectionPolicy::Permissive`].
    pub fn validate_named(&self, record: &Record, section: &str, now: DateTime<Utc>) -> ErrorMap {
        match section.parse::<Section>() {
            Ok(section) => self.validate(record, section, now),
            Err(_) => {
                tracing::warn!(section, policy = ?self.config.unknown_section, "unknown section");
                let mut errors = ErrorMap::new();
                if self.config.unknown_section == UnknownSectionPolicy::FailClosed {
                    errors.add(SECTION_ERROR_KEY, format!("Sección no soportada: '{section}'"));
                }
                errors
            }
        }
    }
}

/// Validate a record with the default engine.
pub fn validate(record: &Record, section: Section, now: DateTime<Utc>) -> ErrorMap {
    ValidationEngine::new().validate(record, section, now)
}
