use serde::{Deserialize, Serialize};

/// Status of a simulated command reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimStatus {
    /// Value within the expected range.
    Normal,
    /// Value indicates a fault.
    Fallo,
    /// No simulated reading is defined for the code.
    Unknown,
}

/// Fixed simulated reading standing in for a hardware response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedReading {
    /// Raw value string (e.g., "45%", "3.2V", "N/A").
    pub value: String,
    pub status: SimStatus,
    /// What the value measures.
    pub description: String,
}

/// Response to a command-code execution. Deterministic — the engine never
/// contacts real hardware; the host collaborator owns the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The hex command code that was looked up.
    pub command: String,
    /// Command description from the table.
    pub description: String,
    /// Fixed simulated reading.
    pub reading: SimulatedReading,
}
