use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operating mode of the diagnostic engine.
///
/// Only `Diagnostico` behavior is implemented; `EdicionFirmware` exists as
/// explicit state so entering it can never silently run diagnostic logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    Diagnostico,
    EdicionFirmware,
}

impl EngineMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diagnostico => "diagnostico",
            Self::EdicionFirmware => "edicion_firmware",
        }
    }
}

impl std::fmt::Display for EngineMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of engine operation a session log entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// A free-text diagnostic request was processed.
    DiagnosticInput,
    /// A command code was executed (simulated).
    ObdCommand,
}

/// One entry in the bounded session log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLogEntry {
    /// When the action was recorded.
    pub timestamp: DateTime<Utc>,
    /// Which operation produced the entry.
    pub action: ActionKind,
    /// Operation-specific payload (raw input text, command code, ...).
    pub payload: serde_json::Value,
    /// Session the entry belongs to (UUIDv7 for time-sortability).
    pub session_id: Uuid,
    /// Engine mode at the time of the action.
    pub mode: EngineMode,
}

impl SessionLogEntry {
    pub fn new(
        action: ActionKind,
        payload: serde_json::Value,
        session_id: Uuid,
        mode: EngineMode,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            payload,
            session_id,
            mode,
        }
    }
}
