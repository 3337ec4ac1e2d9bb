//! Static component knowledge base.
//!
//! Lookup is substring containment, case-insensitive: a canonical term hits
//! a component when it appears in the component `id` or in any field value.
//! The matching rule is declared here once rather than spread over callers.

/// One automotive component with its failure profile.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    /// Knowledge-base ID, lowercase snake_case (e.g., "valvula_iac").
    pub id: &'static str,
    /// Hex command address used to query the component.
    pub hex_address: &'static str,
    /// Nominal operating voltage, when applicable.
    pub voltage_range: Option<&'static str>,
    /// Known failure modes.
    pub common_failures: &'static [&'static str],
    /// Suggested verification steps.
    pub diagnostic_steps: &'static [&'static str],
    /// Symptoms the component is known to cause.
    pub symptoms: &'static [&'static str],
}

/// Built-in component map, in pinned declaration order.
pub const COMPONENT_MAP: &[Component] = &[
    Component {
        id: "switch_ventana_elevador",
        hex_address: "0x12FA",
        voltage_range: Some("5v"),
        common_failures: &["desconexion", "linea_cortada", "hardware_switch_defectuoso"],
        diagnostic_steps: &["verificar_voltaje", "probar_continuidad", "verificar_switch"],
        symptoms: &["vidrios_no_suben", "switch_sin_respuesta"],
    },
    Component {
        id: "valvula_iac",
        hex_address: "0x015",
        voltage_range: None,
        common_failures: &["suciedad", "carbon_acumulado", "bobina_quemada"],
        diagnostic_steps: &["limpiar_conducto", "medir_resistencia_bobina"],
        symptoms: &["ralenti_inestable", "apagado_en_neutro", "rpm_fluctuante"],
    },
    Component {
        id: "sensor_maf",
        hex_address: "0x21A1",
        voltage_range: Some("0-5v"),
        common_failures: &["suciedad", "filamento_roto", "cortocircuito"],
        diagnostic_steps: &["medir_voltaje_senal", "limpiar_filamento"],
        symptoms: &["mezcla_pobre", "tirones_aceleracion"],
    },
];

impl Component {
    /// Declared matching rule: the term occurs (case-insensitive) in the
    /// component ID or in any of its serialized field values.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        if term.is_empty() {
            return false;
        }
        if self.id.contains(&term) || self.hex_address.to_lowercase().contains(&term) {
            return true;
        }
        if let Some(range) = self.voltage_range
            && range.contains(&term)
        {
            return true;
        }
        self.common_failures
            .iter()
            .chain(self.diagnostic_steps.iter())
            .chain(self.symptoms.iter())
            .any(|v| v.contains(&term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(id: &str) -> &'static Component {
        COMPONENT_MAP.iter().find(|c| c.id == id).unwrap()
    }

    #[test]
    fn id_containment() {
        assert!(find("valvula_iac").matches_term("valvula"));
        assert!(find("sensor_maf").matches_term("sensor"));
        assert!(find("switch_ventana_elevador").matches_term("ventana"));
    }

    #[test]
    fn field_value_containment() {
        // "hardware" only occurs in the switch's failure list.
        let switch = find("switch_ventana_elevador");
        assert!(switch.matches_term("hardware"));
        assert!(!find("valvula_iac").matches_term("hardware"));
        assert!(!find("sensor_maf").matches_term("hardware"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(find("sensor_maf").matches_term("SENSOR"));
        assert!(find("switch_ventana_elevador").matches_term("Hardware"));
    }

    #[test]
    fn unrelated_terms_do_not_match() {
        for component in COMPONENT_MAP {
            assert!(!component.matches_term("filtro"));
            assert!(!component.matches_term(""));
        }
    }

    #[test]
    fn symptom_containment() {
        assert!(find("valvula_iac").matches_term("ralenti_inestable"));
    }
}
