//! µCore diagnostic CLI — thin host around the diagnostic engine.
//!
//! Usage:
//!   uc-diagctl <free-text fault description>
//!   uc-diagctl cmd <hex code>
//!
//! Prints the report (or the error envelope) as pretty JSON on stdout.

use serde_json::json;
use tracing_subscriber::EnvFilter;

use uc_diag_core::{DiagError, DiagnosticEngine};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "uc-diagctl starting");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: uc-diagctl <fault description> | uc-diagctl cmd <hex code>");
        std::process::exit(2);
    }

    let engine = DiagnosticEngine::new();

    let output = if args[0] == "cmd" {
        let code = args.get(1).map(String::as_str).unwrap_or_default();
        match engine.execute_command(code) {
            Ok(resp) => json!({ "status": "OK", "respuesta": resp }),
            Err(err) => error_envelope(&err),
        }
    } else {
        let text = args.join(" ");
        match engine.analyze_and_diagnose(&text) {
            Ok(report) => json!({ "status": "OK", "diagnostico": report }),
            Err(err) => error_envelope(&err),
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Error envelope in the shape hosts expect: status code, message, hints.
fn error_envelope(err: &DiagError) -> serde_json::Value {
    match err {
        DiagError::ComponentNotFound { hints } => json!({
            "status": err.code(),
            "mensaje": err.to_string(),
            "sugerencias": hints,
        }),
        DiagError::UnknownCommand { available, .. } => json!({
            "status": err.code(),
            "mensaje": err.to_string(),
            "comandos_disponibles": available,
        }),
        DiagError::SandboxLocked { .. } => json!({
            "status": err.code(),
            "mensaje": err.to_string(),
        }),
    }
}
