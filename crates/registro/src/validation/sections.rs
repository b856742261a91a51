//! Rule tables for every section.

use crate::section::Section;

use super::rule::{Bound, Check, Format, Rule};

/// Highest accepted average salary for a job.
pub const MAX_MEDIA_SALARIAL: f64 = 2_000_000_000.0;

/// The rule set applied to records of one section.
#[derive(Debug, Clone, Copy)]
pub struct SectionRules {
    pub section: Section,
    pub rules: &'static [Rule],
}

impl SectionRules {
    /// Fields whose absence alone fails the record, in table order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().filter(|r| r.is_required()).map(|r| r.field)
    }

    /// Returns true if the field is stored as a number.
    ///
    /// Digit-count fields (`cedula`, `celular`) stay textual so leading
    /// zeros survive.
    pub fn is_numeric_field(&self, field: &str) -> bool {
        let checks = || self.rules.iter().filter(move |r| r.field == field).map(|r| &r.check);
        checks().any(|c| matches!(c, Check::Range { .. }))
            && !checks().any(|c| matches!(c, Check::Digits { .. }))
    }

    /// Rules that apply to one field, in evaluation order.
    pub fn rules_for<'a>(&self, field: &'a str) -> impl Iterator<Item = &'static Rule> + 'a {
        let rules: &'static [Rule] = self.rules;
        rules.iter().filter(move |r| r.field == field)
    }
}

/// Rule set for a section.
pub fn section_rules(section: Section) -> &'static SectionRules {
    match section {
        Section::Personal => &PERSONAL,
        Section::Vehicles => &VEHICLES,
        Section::Company => &COMPANY,
        Section::Fines => &FINES,
        Section::Housing => &HOUSING,
        Section::Location => &LOCATION,
        Section::Departament => &DEPARTAMENT,
        Section::Work => &WORK,
        Section::WorkApply => &WORK_APPLY,
        Section::Family => &FAMILY,
    }
}

static PERSONAL: SectionRules = SectionRules {
    section: Section::Personal,
    rules: &[
        Rule::required("primer_nombre", "Primer nombre es requerido"),
        Rule::required("primer_apellido", "Primer apellido es requerido"),
        Rule::required("fecha_nacimiento", "Fecha de nacimiento es requerida"),
        Rule::required("sexo", "Sexo es requerido"),
        Rule::required("email", "Email es requerido"),
        Rule::required("celular", "Celular es requerido"),
        Rule::required("salario", "Salario es requerido"),
        Rule::required("cedula", "Cédula es requerida"),
        Rule::format("email", Format::Email, "Email inválido"),
        Rule::positive("celular", "Celular debe ser un número positivo"),
        Rule::digits("celular", 10, 10, "Celular debe tener 10 dígitos"),
        Rule::positive("cedula", "Cédula debe ser un número positivo"),
        Rule::digits("cedula", 6, 10, "Cédula debe tener entre 6 y 10 dígitos"),
        Rule::non_negative("salario", "Salario debe ser un número positivo"),
        Rule::format("fecha_nacimiento", Format::Date, "Fecha de nacimiento inválida"),
        Rule::not_future("fecha_nacimiento", "Fecha de nacimiento no puede ser futura"),
    ],
};

static VEHICLES: SectionRules = SectionRules {
    section: Section::Vehicles,
    rules: &[
        Rule::required("nombre", "Nombre es requerido"),
        Rule::required("marca", "Marca es requerida"),
        Rule::required("tipo", "Tipo es requerido"),
        Rule::required("color", "Color es requerido"),
        Rule::required("placa", "Placa es requerida"),
        Rule::format("placa", Format::Plate, "Placa inválida: use ABC123 (carro) o ABC12D (moto)"),
        Rule::non_negative("valor_nuevo", "Valor nuevo debe ser un número positivo"),
    ],
};

static COMPANY: SectionRules = SectionRules {
    section: Section::Company,
    rules: &[
        Rule::required("nombre", "Nombre es requerido"),
        Rule::required("id_departamento_constitucion", "Departamento de constitución es requerido"),
        Rule::min_length("nombre", 2, "Nombre debe tener al menos 2 caracteres"),
    ],
};

// Fines are keyed by vehicle and holder, as the ticket form submits them.
static FINES: SectionRules = SectionRules {
    section: Section::Fines,
    rules: &[
        Rule::required("id_vehiculo", "Vehículo es requerido"),
        Rule::required("id_poseedor", "Poseedor es requerido"),
        Rule::required("monto", "Monto es requerido"),
        Rule::required("fecha", "Fecha es requerida"),
        Rule::required("razon", "Razón es requerida"),
        Rule::positive("monto", "Monto debe ser mayor a cero"),
        Rule::format("fecha", Format::Date, "Fecha inválida"),
        Rule::not_future("fecha", "Fecha no puede ser futura"),
    ],
};

static HOUSING: SectionRules = SectionRules {
    section: Section::Housing,
    rules: &[
        Rule::required("id_persona", "Dueño es requerido"),
        Rule::required("id_municipio", "Municipio es requerido"),
        Rule::required("direccion", "Dirección es requerida"),
        Rule::required("barrio", "Barrio es requerido"),
        Rule::required("pisos", "Pisos es requerido"),
        Rule::required("area_construida", "Área construida es requerida"),
        Rule::required("area_total", "Área total es requerida"),
        Rule::required("habitaciones", "Habitaciones es requerido"),
        Rule::required("baños", "Baños es requerido"),
        Rule::required("estrato", "Estrato es requerido"),
        Rule::required("tipo", "Tipo es requerido"),
        Rule::non_negative("pisos", "Pisos debe ser un número positivo"),
        Rule::non_negative("area_construida", "Área construida debe ser un número positivo"),
        Rule::non_negative("area_total", "Área total debe ser un número positivo"),
        Rule::non_negative("habitaciones", "Habitaciones debe ser un número positivo"),
        Rule::non_negative("baños", "Baños debe ser un número positivo"),
        Rule::range("estrato", Bound::Inclusive(1.0), Bound::Inclusive(6.0), "Estrato debe estar entre 1 y 6"),
    ],
};

static LOCATION: SectionRules = SectionRules {
    section: Section::Location,
    rules: &[
        Rule::required("area_total", "Área total es requerida"),
        Rule::required("habitantes_censo_2023", "Habitantes (censo 2023) es requerido"),
        Rule::positive("area_total", "Área total debe ser mayor a cero"),
        Rule::positive("habitantes_censo_2023", "Habitantes debe ser mayor a cero"),
    ],
};

static DEPARTAMENT: SectionRules = SectionRules {
    section: Section::Departament,
    rules: &[
        Rule::required("nombre_departamento", "Nombre del departamento es requerido"),
        Rule::required("id_gobernador", "Gobernador es requerido"),
    ],
};

static WORK: SectionRules = SectionRules {
    section: Section::Work,
    rules: &[
        Rule::required("nombre", "Nombre es requerido"),
        Rule::required("media_salarial", "Media salarial es requerida"),
        Rule::non_negative("media_salarial", "Media salarial debe ser un número positivo"),
        Rule::range(
            "media_salarial",
            Bound::Unbounded,
            Bound::Inclusive(MAX_MEDIA_SALARIAL),
            "Media salarial no puede superar 2.000.000.000",
        ),
    ],
};

static WORK_APPLY: SectionRules = SectionRules {
    section: Section::WorkApply,
    rules: &[Rule::required("id_persona", "Persona es requerida")],
};

static FAMILY: SectionRules = SectionRules {
    section: Section::Family,
    rules: &[
        Rule::required("nombre_familia", "Nombre de familia es requerido"),
        Rule::required("id_persona", "Cabeza de familia es requerida"),
        Rule::min_length("nombre_familia", 3, "Nombre de familia debe tener al menos 3 caracteres"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_its_own_table() {
        for section in Section::all() {
            assert_eq!(section_rules(*section).section, *section);
            assert!(section_rules(*section).required_fields().count() > 0);
        }
    }

    #[test]
    fn test_required_rules_come_first() {
        for section in Section::all() {
            let rules = section_rules(*section).rules;
            let first_other = rules.iter().position(|r| !r.is_required()).unwrap_or(rules.len());
            assert!(rules[first_other..].iter().all(|r| !r.is_required()), "{section}");
        }
    }

    #[test]
    fn test_every_constrained_field_is_known() {
        // Optional constrained fields are allowed only where the table says so.
        let optional: Vec<_> = Section::all()
            .iter()
            .flat_map(|s| {
                let table = section_rules(*s);
                table
                    .rules
                    .iter()
                    .filter(|r| !r.is_required())
                    .filter(|r| !table.required_fields().any(|f| f == r.field))
                    .map(|r| (s.as_str(), r.field))
                    .collect::<Vec<_>>()
            })
            .collect();
        assert_eq!(optional, vec![("vehicles", "valor_nuevo")]);
    }

    #[test]
    fn test_numeric_fields() {
        let housing = section_rules(Section::Housing);
        assert!(housing.is_numeric_field("estrato"));
        assert!(housing.is_numeric_field("baños"));
        assert!(!housing.is_numeric_field("direccion"));

        let personal = section_rules(Section::Personal);
        assert!(personal.is_numeric_field("salario"));
        assert!(!personal.is_numeric_field("cedula"));
        assert!(!personal.is_numeric_field("celular"));
    }

    #[test]
    fn test_rules_for_field_keeps_order() {
        let personal = section_rules(Section::Personal);
        let messages: Vec<_> = personal.rules_for("celular").map(|r| r.message).collect();
        assert_eq!(messages[0], "Celular es requerido");
        assert_eq!(messages.len(), 3);
    }
}
