//! Diagnostic engine error types.
//!
//! Both outcomes are expected and recoverable — they are returned as typed
//! results, never panics. Malformed or nonsense input always yields either
//! a report or one of these errors.

use thiserror::Error;
use uc_protocol::EngineMode;

/// Errors the diagnostic engine can return.
#[derive(Debug, Clone, Error)]
pub enum DiagError {
    /// No vocabulary match for any token (code E-404).
    #[error("no se encontró ese componente en el mapa actual")]
    ComponentNotFound {
        /// Remediation hints for the operator.
        hints: Vec<String>,
    },

    /// Command code absent from the table (code E-CMD).
    #[error("comando {command} no reconocido")]
    UnknownCommand {
        command: String,
        /// Every valid code, as a remediation hint.
        available: Vec<String>,
    },

    /// Diagnostic operation attempted outside `diagnostico` mode.
    #[error("sandbox bloqueado: operación de diagnóstico no disponible en modo {mode}")]
    SandboxLocked { mode: EngineMode },
}

impl DiagError {
    /// Stable status code surfaced to hosts. Only "E-404" and "E-CMD" are
    /// contractual; "E-LOCK" is internal.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ComponentNotFound { .. } => "E-404",
            Self::UnknownCommand { .. } => "E-CMD",
            Self::SandboxLocked { .. } => "E-LOCK",
        }
    }

    pub(crate) fn component_not_found() -> Self {
        Self::ComponentNotFound {
            hints: vec![
                "verificar ortografía".to_string(),
                "usar términos técnicos específicos".to_string(),
            ],
        }
    }
}

/// Convenience alias for diagnostic results.
pub type DiagResult<T> = Result<T, DiagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(DiagError::component_not_found().code(), "E-404");
        let err = DiagError::UnknownCommand {
            command: "0xFFFF".into(),
            available: vec!["0x015".into()],
        };
        assert_eq!(err.code(), "E-CMD");
        let err = DiagError::SandboxLocked {
            mode: EngineMode::EdicionFirmware,
        };
        assert_eq!(err.code(), "E-LOCK");
    }

    #[test]
    fn not_found_carries_hints() {
        let DiagError::ComponentNotFound { hints } = DiagError::component_not_found() else {
            panic!("wrong variant");
        };
        assert_eq!(hints.len(), 2);
        assert!(hints[0].contains("ortografía"));
    }

    #[test]
    fn display_messages() {
        let err = DiagError::UnknownCommand {
            command: "0xFFFF".into(),
            available: vec![],
        };
        assert_eq!(err.to_string(), "comando 0xFFFF no reconocido");
    }
}
