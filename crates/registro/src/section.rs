//! Sections: the entity kinds a record can be validated as.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistroError;

/// Identifies which entity's rule set applies to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// Person (`Persona`).
    Personal,
    /// Vehicle (`Vehiculo`).
    Vehicles,
    /// Employer (`Empresa`).
    Company,
    /// Traffic fine (`Comparendo`).
    #[serde(alias = "ticket")]
    Fines,
    /// Housing unit and its owner (`Vivienda`, `Persona_Vivienda`).
    Housing,
    /// Municipality (`Municipio`).
    Location,
    /// Department (`Departamento`).
    #[serde(alias = "departamento")]
    Departament,
    /// Job (`Trabajo`).
    Work,
    /// Job application linking a person to a job.
    WorkApply,
    /// Family unit.
    #[serde(alias = "families")]
    Family,
}

impl Section {
    /// Every section, in declaration order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Personal,
            Section::Vehicles,
            Section::Company,
            Section::Fines,
            Section::Housing,
            Section::Location,
            Section::Departament,
            Section::Work,
            Section::WorkApply,
            Section::Family,
        ]
    }

    /// Canonical section key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Personal => "personal",
            Section::Vehicles => "vehicles",
            Section::Company => "company",
            Section::Fines => "fines",
            Section::Housing => "housing",
            Section::Location => "location",
            Section::Departament => "departament",
            Section::Work => "work",
            Section::WorkApply => "work-apply",
            Section::Family => "family",
        }
    }

    /// Human-readable entity name.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Personal => "Persona",
            Section::Vehicles => "Vehículo",
            Section::Company => "Empresa",
            Section::Fines => "Comparendo",
            Section::Housing => "Vivienda",
            Section::Location => "Municipio",
            Section::Departament => "Departamento",
            Section::Work => "Trabajo",
            Section::WorkApply => "Postulación",
            Section::Family => "Familia",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = RegistroError;

    /// Parse a section key, accepting the aliases older forms send.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let section = match s.trim().to_lowercase().as_str() {
            "personal" => Section::Personal,
            "vehicles" | "vehicle" => Section::Vehicles,
            "company" => Section::Company,
            "fines" | "ticket" => Section::Fines,
            "housing" => Section::Housing,
            "location" => Section::Location,
            "departament" | "departamento" => Section::Departament,
            "work" => Section::Work,
            "work-apply" | "work_apply" => Section::WorkApply,
            "family" | "families" => Section::Family,
            _ => return Err(RegistroError::UnknownSection(s.to_string())),
        };
        Ok(section)
    }
}
