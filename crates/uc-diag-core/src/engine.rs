//! The diagnostic engine: analysis, correlation, command simulation.

use std::sync::Mutex;

use serde_json::json;
use uuid::Uuid;

use uc_fuzzy_match::MatchEngine;
use uc_protocol::{
    ActionKind, CommandResponse, DiagnosticAnalysis, DiagnosticEntry, DiagnosticReport,
    EngineMode, Priority, SessionLogEntry, SymptomTag,
};

use crate::command_table;
use crate::components::{COMPONENT_MAP, Component};
use crate::error::{DiagError, DiagResult};
use crate::session::SessionLog;
use crate::symptoms;

/// Aggregate confidence above which a report is classified `alta`.
const HIGH_PRIORITY_THRESHOLD: f64 = 0.8;

/// Fallback action when a vocabulary entry carries none.
const FALLBACK_ACTION: &str = "verificar_estado";

/// Mode state — explicit, never inferred from other fields.
#[derive(Debug, Clone, Copy)]
struct ModeState {
    mode: EngineMode,
    sandbox_locked: bool,
}

/// Turns free-text fault descriptions into ranked, actionable reports.
///
/// Stateless per call except for the match cache and the session log, both
/// behind their own locks. All operations complete in time bounded by
/// vocabulary size × token count; nothing blocks on I/O.
pub struct DiagnosticEngine {
    matcher: MatchEngine,
    components: &'static [Component],
    log: SessionLog,
    session_id: Uuid,
    state: Mutex<ModeState>,
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        Self {
            matcher: MatchEngine::new(),
            components: COMPONENT_MAP,
            log: SessionLog::new(),
            session_id: Uuid::now_v7(),
            state: Mutex::new(ModeState {
                mode: EngineMode::Diagnostico,
                sandbox_locked: false,
            }),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    // ── Mode gate ───────────────────────────────────────────────

    pub fn mode(&self) -> EngineMode {
        self.state.lock().unwrap().mode
    }

    /// Enter firmware-editing mode. The mode is declared but unimplemented;
    /// entering it locks the sandbox so diagnostic operations refuse to run
    /// instead of executing silently in the wrong mode.
    pub fn enter_firmware_mode(&self) {
        let mut state = self.state.lock().unwrap();
        state.mode = EngineMode::EdicionFirmware;
        state.sandbox_locked = true;
        tracing::info!(mode = %state.mode, "sandbox locked");
    }

    /// Return to diagnostic mode and unlock the sandbox.
    pub fn enter_diagnostic_mode(&self) {
        let mut state = self.state.lock().unwrap();
        state.mode = EngineMode::Diagnostico;
        state.sandbox_locked = false;
    }

    fn ensure_unlocked(&self) -> DiagResult<()> {
        let state = self.state.lock().unwrap();
        if state.sandbox_locked || state.mode != EngineMode::Diagnostico {
            return Err(DiagError::SandboxLocked { mode: state.mode });
        }
        Ok(())
    }

    // ── Analysis ────────────────────────────────────────────────

    /// Tokenize the request and resolve every token against the vocabulary.
    ///
    /// Duplicate matches are kept: a component mentioned twice weighs twice
    /// in the mean confidence.
    pub fn analyze(&self, text: &str) -> DiagnosticAnalysis {
        let lower = text.to_lowercase();
        let tokens: Vec<String> = lower.split_whitespace().map(str::to_string).collect();

        let matched_components: Vec<_> = tokens
            .iter()
            .filter_map(|token| self.matcher.resolve(token))
            .collect();

        // Symptom phrases are multi-word; scan the whole text, not tokens.
        let detected_symptoms = symptoms::detect(&lower);

        let confidence = if matched_components.is_empty() {
            0.0
        } else {
            matched_components.iter().map(|m| m.confidence).sum::<f64>()
                / matched_components.len() as f64
        };

        tracing::debug!(
            tokens = tokens.len(),
            matches = matched_components.len(),
            symptoms = detected_symptoms.len(),
            confidence,
            "request analyzed"
        );

        DiagnosticAnalysis {
            tokens,
            matched_components,
            detected_symptoms,
            confidence,
        }
    }

    // ── Correlation ─────────────────────────────────────────────

    /// Cross-reference an analysis against the component knowledge base.
    ///
    /// An analysis that matched nothing at all — no components and no
    /// symptom phrases — is an expected outcome and returns
    /// `ComponentNotFound` (E-404) with remediation hints. A symptom-only
    /// analysis still produces a report: correlation entries do not depend
    /// on fuzzy-match confidence.
    pub fn diagnose(&self, analysis: &DiagnosticAnalysis) -> DiagResult<DiagnosticReport> {
        if analysis.matched_components.is_empty() && analysis.detected_symptoms.is_empty() {
            return Err(DiagError::component_not_found());
        }

        let mut entries = Vec::new();
        for matched in &analysis.matched_components {
            for component in self
                .components
                .iter()
                .filter(|c| c.matches_term(&matched.canonical))
            {
                entries.push(DiagnosticEntry {
                    component: component.id.to_string(),
                    recommended_action: matched
                        .actions
                        .first()
                        .cloned()
                        .unwrap_or_else(|| FALLBACK_ACTION.to_string()),
                    command_code: component.hex_address.to_string(),
                    common_failures: to_owned(component.common_failures),
                    diagnostic_steps: to_owned(component.diagnostic_steps),
                    explanation: None,
                });
            }
        }

        // Symptom correlation — independent of component matches.
        for tag in &analysis.detected_symptoms {
            if let Some(entry) = supplemental_entry(*tag) {
                entries.push(entry);
            }
        }

        let priority = if analysis.confidence > HIGH_PRIORITY_THRESHOLD {
            Priority::Alta
        } else {
            Priority::Media
        };

        Ok(DiagnosticReport { entries, priority })
    }

    // ── Host-facing operations ──────────────────────────────────

    /// Full pipeline: log, analyze, diagnose.
    pub fn analyze_and_diagnose(&self, text: &str) -> DiagResult<DiagnosticReport> {
        self.ensure_unlocked()?;
        self.log_action(ActionKind::DiagnosticInput, json!({ "input": text }));

        let analysis = self.analyze(text);
        self.diagnose(&analysis)
    }

    /// Execute a command code against the simulated table.
    ///
    /// Unknown codes return `UnknownCommand` (E-CMD) listing every valid
    /// code. Never contacts hardware.
    pub fn execute_command(&self, code: &str) -> DiagResult<CommandResponse> {
        self.ensure_unlocked()?;
        self.log_action(ActionKind::ObdCommand, json!({ "command": code }));

        let Some(entry) = command_table::lookup(code) else {
            tracing::warn!(command = code, "unknown command code");
            return Err(DiagError::UnknownCommand {
                command: code.to_string(),
                available: command_table::ALL_CODES
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            });
        };

        Ok(CommandResponse {
            command: entry.code.to_string(),
            description: entry.description.to_string(),
            reading: command_table::simulated_reading(entry.code),
        })
    }

    /// Up to `n` most recent session log entries, most recent last.
    pub fn recent_log(&self, n: usize) -> Vec<SessionLogEntry> {
        self.log.recent(n)
    }

    fn log_action(&self, action: ActionKind, payload: serde_json::Value) {
        let mode = self.state.lock().unwrap().mode;
        self.log
            .append(SessionLogEntry::new(action, payload, self.session_id, mode));
    }
}

impl Default for DiagnosticEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Fixed supplemental entries triggered by specific symptom tags, appended
/// even when the component was not otherwise matched.
fn supplemental_entry(tag: SymptomTag) -> Option<DiagnosticEntry> {
    match tag {
        SymptomTag::RalentiProblema => Some(DiagnosticEntry {
            component: "valvula_iac".to_string(),
            recommended_action: "verificar_funcionamiento".to_string(),
            command_code: "0x015".to_string(),
            common_failures: Vec::new(),
            diagnostic_steps: Vec::new(),
            explanation: Some(
                "Ralentí inestable sugiere problema en control de aire de ralentí".to_string(),
            ),
        }),
        _ => None,
    }
}
