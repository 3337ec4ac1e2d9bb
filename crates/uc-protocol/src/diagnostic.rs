use serde::{Deserialize, Serialize};

use crate::matching::MatchResult;

/// Symptom tag assigned when a known phrase is found in the request text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomTag {
    /// "se apaga" — engine stalls.
    MotorApagado,
    /// "ralenti" — unstable idle.
    RalentiProblema,
    /// "vibra" — engine vibration.
    VibracionMotor,
    /// "no arranca" — no-start condition.
    FalloArranque,
    /// "humo" — visible smoke, defective combustion.
    CombustionDefectuosa,
}

impl SymptomTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MotorApagado => "motor_apagado",
            Self::RalentiProblema => "ralenti_problema",
            Self::VibracionMotor => "vibracion_motor",
            Self::FalloArranque => "fallo_arranque",
            Self::CombustionDefectuosa => "combustion_defectuosa",
        }
    }
}

impl std::fmt::Display for SymptomTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokenized and matched view of one diagnostic request.
///
/// Ephemeral — built per call, logged, then discarded. Matched components
/// are deliberately NOT deduplicated: a token mentioned twice contributes
/// twice to the mean confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticAnalysis {
    /// Whitespace tokens of the lowercased input.
    pub tokens: Vec<String>,
    /// Every non-absent fuzzy resolution, in token order.
    pub matched_components: Vec<MatchResult>,
    /// Symptom tags detected over the whole input text.
    pub detected_symptoms: Vec<SymptomTag>,
    /// Arithmetic mean of matched confidences; 0.0 when nothing matched.
    pub confidence: f64,
}

/// Coarse urgency classification derived from aggregate match confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Alta,
    Media,
}

/// One actionable finding in a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    /// Component ID from the knowledge base (e.g., "valvula_iac").
    pub component: String,
    /// First follow-up action of the matched vocabulary entry.
    pub recommended_action: String,
    /// Hex command code of the component, or "N/A".
    pub command_code: String,
    /// Known failure modes of the component.
    #[serde(default)]
    pub common_failures: Vec<String>,
    /// Suggested verification steps.
    #[serde(default)]
    pub diagnostic_steps: Vec<String>,
    /// Explanatory text for symptom-correlated entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Ranked result of a diagnostic request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub entries: Vec<DiagnosticEntry>,
    pub priority: Priority,
}
