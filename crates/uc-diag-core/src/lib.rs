//! Diagnostic engine for µCore automotive diagnostics.
//!
//! Turns a free-text fault description into a ranked, actionable report:
//! tokenize → fuzzy-resolve each token → detect symptom phrases → correlate
//! against the component knowledge base → report. Also owns the simulated
//! command table and a bounded session log.

pub mod command_table;
pub mod components;
pub mod engine;
pub mod error;
pub mod session;
pub mod symptoms;

pub use command_table::CommandEntry;
pub use components::Component;
pub use engine::DiagnosticEngine;
pub use error::{DiagError, DiagResult};
pub use session::SessionLog;
