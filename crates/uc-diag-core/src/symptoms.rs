//! Symptom phrase detection over the raw request text.
//!
//! Phrases are multi-word, so detection scans the whole lowercased input
//! rather than token-by-token. Every phrase found contributes its tag.

use uc_protocol::SymptomTag;

/// Fixed phrase → tag table, in pinned declaration order.
pub const SYMPTOM_PATTERNS: &[(&str, SymptomTag)] = &[
    ("se apaga", SymptomTag::MotorApagado),
    ("ralenti", SymptomTag::RalentiProblema),
    ("vibra", SymptomTag::VibracionMotor),
    ("no arranca", SymptomTag::FalloArranque),
    ("humo", SymptomTag::CombustionDefectuosa),
];

/// Detect every symptom phrase occurring in `text` (case-insensitive).
pub fn detect(text: &str) -> Vec<SymptomTag> {
    let lower = text.to_lowercase();
    SYMPTOM_PATTERNS
        .iter()
        .filter(|(phrase, _)| lower.contains(phrase))
        .map(|(_, tag)| *tag)
        .collect()
}
