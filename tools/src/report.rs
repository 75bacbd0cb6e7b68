//! JSON input and output helpers for the CLI.

use anyhow::{Context, Result};
use codec::{validate, InspectReport, Payload};
use serde_json::{json, Value};

/// Parses and validates a payload from JSON text.
///
/// Both canonical and compact key forms are accepted.
pub fn load_payload_json(text: &str) -> Result<Payload> {
    let bytes = text.trim().as_bytes();
    let value = wire::deserialize_payload(bytes).context("parse payload json")?;
    validate(&value).context("validate payload")
}

/// Renders an inspection report as a JSON object.
pub fn report_json(report: &InspectReport) -> Value {
    let verdict = match &report.verdict {
        Ok(kind) => json!({ "valid": true, "kind": kind }),
        Err(err) => json!({ "valid": false, "error": err.to_string() }),
    };
    json!({
        "base": report.base.to_string(),
        "base_codepoint": format!("U+{:04X}", u32::from(report.base)),
        "payload_bytes": report.payload_bytes,
        "skipped": report.skipped,
        "format": report.format.to_string(),
        "verdict": verdict,
        "value": report.value,
    })
}
