//! Static command table — match-based lookup keyed by the exact code string.
//!
//! Every entry carries a fixed simulated reading; execution is a
//! deterministic table lookup standing in for the hardware call made by an
//! external collaborator.

use uc_protocol::{SimStatus, SimulatedReading};

/// Command entry from the static table.
#[derive(Debug, Clone)]
pub struct CommandEntry {
    pub code: &'static str,
    pub description: &'static str,
}

/// All known command codes, in table order (surfaced in E-CMD hints).
pub const ALL_CODES: &[&str] = &["0x015", "0x21A1", "0x12FA", "0x0105", "0x010C", "0x010D"];

/// Look up a command code. Codes are matched exactly as written in the
/// table ("0x" prefix, uppercase hex digits).
pub fn lookup(code: &str) -> Option<CommandEntry> {
    // Resolve to the table's own static string so the entry does not
    // borrow from the caller.
    let code = *ALL_CODES.iter().find(|c| **c == code)?;
    let description = match code {
        "0x015" => "Lectura estado válvula IAC",
        "0x21A1" => "Datos sensor MAF",
        "0x12FA" => "Estado switch elevadores",
        "0x0105" => "Temperatura refrigerante",
        "0x010C" => "RPM motor",
        "0x010D" => "Velocidad vehículo",
        _ => return None,
    };
    Some(CommandEntry { code, description })
}

/// Fixed simulated reading for a known code. Codes without a scripted
/// reading return an `unknown` placeholder, never an error.
pub fn simulated_reading(code: &str) -> SimulatedReading {
    match code {
        "0x015" => SimulatedReading {
            value: "45%".into(),
            status: SimStatus::Normal,
            description: "Posición válvula IAC".into(),
        },
        "0x21A1" => SimulatedReading {
            value: "3.2V".into(),
            status: SimStatus::Normal,
            description: "Voltaje sensor MAF".into(),
        },
        "0x12FA" => SimulatedReading {
            value: "0V".into(),
            status: SimStatus::Fallo,
            description: "Switch elevador sin voltaje".into(),
        },
        _ => SimulatedReading {
            value: "N/A".into(),
            status: SimStatus::Unknown,
            description: "Sin respuesta simulada definida".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_descriptions() {
        for code in ALL_CODES {
            let entry = lookup(code).unwrap();
            assert_eq!(entry.code, *code);
            assert!(!entry.description.is_empty());
        }
    }

    #[test]
    fn entry_outlives_caller_buffer() {
        let entry = {
            let owned = String::from("0x015");
            lookup(&owned).unwrap()
        };
        assert_eq!(entry.code, "0x015");
        assert_eq!(entry.description, "Lectura estado válvula IAC");
    }

    #[test]
    fn unknown_code_returns_none() {
        assert!(lookup("0xFFFF").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("015").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // The table is keyed by the exact code string.
        assert!(lookup("0X015").is_none());
        assert!(lookup("0x12fa").is_none());
    }

    #[test]
    fn scripted_readings() {
        let iac = simulated_reading("0x015");
        assert_eq!(iac.value, "45%");
        assert_eq!(iac.status, SimStatus::Normal);

        let switch = simulated_reading("0x12FA");
        assert_eq!(switch.value, "0V");
        assert_eq!(switch.status, SimStatus::Fallo);
    }

    #[test]
    fn unscripted_reading_is_unknown() {
        let rpm = simulated_reading("0x010C");
        assert_eq!(rpm.value, "N/A");
        assert_eq!(rpm.status, SimStatus::Unknown);
    }
}
