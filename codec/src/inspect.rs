//! Advisory inspection of encoded text.

use std::fmt;

use payload::{validate, PayloadKind, ValidationError};
use serde_json::Value;
use wire::PayloadFormat;

use crate::decode::recover;
use crate::error::CodecResult;
use crate::limits::CodecLimits;

/// What an encoded string carries, with the validator verdict attached.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectReport {
    /// The visible base codepoint.
    pub base: char,
    /// Number of bytes recovered from selectors.
    pub payload_bytes: usize,
    /// Non-selector codepoints skipped after the base.
    pub skipped: usize,
    /// Key schema the payload was written in.
    pub format: PayloadFormat,
    /// The recovered value in canonical key form.
    pub value: Value,
    /// Which variant the value validated as, or why it did not.
    pub verdict: Result<PayloadKind, ValidationError>,
}

impl InspectReport {
    /// Returns `true` if the recovered value is a legal payload.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Inspects the payload hidden in `text` without failing on validation.
///
/// A value that breaks a business rule is reported in
/// [`InspectReport::verdict`] instead of returned as an error.
///
/// # Errors
///
/// Fails like [`decode`](crate::decode) for everything up to and including
/// JSON parsing.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(text), fields(text_len = text.len()), err(level = "debug"))
)]
pub fn inspect_encoded(text: &str) -> CodecResult<InspectReport> {
    let recovered = recover(text, &CodecLimits::default())?;
    let verdict = validate(&recovered.payload.value).map(|payload| payload.kind());
    Ok(InspectReport {
        base: recovered.base,
        payload_bytes: recovered.byte_len,
        skipped: recovered.skipped,
        format: recovered.payload.format,
        value: recovered.payload.value,
        verdict,
    })
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "base:     {} (U+{:04X})", self.base, u32::from(self.base))?;
        writeln!(f, "bytes:    {}", self.payload_bytes)?;
        writeln!(f, "skipped:  {}", self.skipped)?;
        writeln!(f, "format:   {}", self.format)?;
        match &self.verdict {
            Ok(kind) => writeln!(f, "verdict:  valid {kind}")?,
            Err(err) => writeln!(f, "verdict:  invalid ({err})")?,
        }
        write!(f, "value:    {}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;
    use payload::{ContractPayload, Payload, TokenPayload};
    use selectors::bytes_to_selectors;
    use serde_json::json;

    #[test]
    fn reports_valid_compact_contract() {
        let contract = ContractPayload::new("📜", "job_contract_v1", "did:hapa:alex123", 1)
            .with_receiver("did:hapa:bob456")
            .with_term("description", "d".repeat(120));
        let encoded = encode("📜", &Payload::from(contract)).unwrap();
        let report = inspect_encoded(&encoded).unwrap();
        assert_eq!(report.base, '📜');
        assert_eq!(report.format, PayloadFormat::Compact);
        assert_eq!(report.verdict, Ok(PayloadKind::Contract));
        assert_eq!(report.payload_bytes, encoded.chars().count() - 1);
        assert!(report.is_valid());
    }

    #[test]
    fn reports_invalid_without_failing() {
        let json = r#"{"type":"token","emoji":"🍌","amount":1,"sender":"not-a-did","receiver":"did:hapa:bob456","timestamp":1}"#;
        let text = format!("🍌\n{}", bytes_to_selectors(json.as_bytes()));
        let report = inspect_encoded(&text).unwrap();
        assert_eq!(report.skipped, 1);
        assert_eq!(report.format, PayloadFormat::Canonical);
        assert!(matches!(
            report.verdict,
            Err(ValidationError::InvalidIdentifier { .. })
        ));
        assert_eq!(report.value["sender"], json!("not-a-did"));
    }

    #[test]
    fn display_lists_fields() {
        let payload = Payload::from(TokenPayload::new(
            "🍌",
            100,
            "did:hapa:alex123",
            "did:hapa:bob456",
            1,
        ));
        let report = inspect_encoded(&encode("🍌", &payload).unwrap()).unwrap();
        let text = report.to_string();
        assert!(text.contains("U+1F34C"));
        assert!(text.contains("valid token"));
        assert!(text.contains("canonical"));
    }
}
