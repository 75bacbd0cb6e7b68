//! Payload deserialization with compact-form detection.

use serde_json::Value;

use crate::compact::{compact_kind, expand};
use crate::error::{DecodeError, MalformedReason, WireResult};
use crate::serialize::PayloadFormat;

/// A parsed payload value in canonical key form.
#[derive(Debug, Clone, PartialEq)]
pub struct DeserializedPayload {
    pub value: Value,
    /// Key schema the bytes were written in.
    pub format: PayloadFormat,
}

/// Parses recovered bytes into a canonical JSON value.
///
/// Compact objects are expanded to canonical keys; anything else is returned
/// as parsed, unknown keys included. Required fields are not checked here.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedEncoding`] if the bytes are not UTF-8 JSON.
pub fn deserialize_payload(bytes: &[u8]) -> WireResult<Value> {
    deserialize_payload_with_format(bytes).map(|deserialized| deserialized.value)
}

/// Parses recovered bytes, reporting which key schema they used.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedEncoding`] if the bytes are not UTF-8 JSON.
pub fn deserialize_payload_with_format(bytes: &[u8]) -> WireResult<DeserializedPayload> {
    let text = std::str::from_utf8(bytes).map_err(|err| {
        DecodeError::MalformedEncoding(MalformedReason::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        })
    })?;
    let value: Value = serde_json::from_str(text).map_err(|err| {
        DecodeError::MalformedEncoding(MalformedReason::InvalidJson {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        })
    })?;

    let expanded = value
        .as_object()
        .and_then(|object| compact_kind(object).map(|kind| expand(object, kind)));
    Ok(match expanded {
        Some(object) => DeserializedPayload {
            value: Value::Object(object),
            format: PayloadFormat::Compact,
        },
        None => DeserializedPayload {
            value,
            format: PayloadFormat::Canonical,
        },
    })
}

/// Reports which key schema a parsed value uses.
#[must_use]
pub fn detect_format(value: &Value) -> PayloadFormat {
    match value.as_object().and_then(compact_kind) {
        Some(_) => PayloadFormat::Compact,
        None => PayloadFormat::Canonical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_passes_through_with_unknown_keys() {
        let bytes = br#"{"type":"token","emoji":"x","extra":[1,2]}"#;
        let deserialized = deserialize_payload_with_format(bytes).unwrap();
        assert_eq!(deserialized.format, PayloadFormat::Canonical);
        assert_eq!(deserialized.value["extra"], json!([1, 2]));
    }

    #[test]
    fn compact_is_expanded() {
        let bytes = br#"{"t":"token","e":"x","s":"a","r":"b","ts":1,"a":2}"#;
        let deserialized = deserialize_payload_with_format(bytes).unwrap();
        assert_eq!(deserialized.format, PayloadFormat::Compact);
        assert_eq!(
            deserialized.value,
            json!({"type":"token","emoji":"x","amount":2,"sender":"a","receiver":"b","timestamp":1})
        );
        assert!(deserialized.value.get("message").is_none());
    }

    #[test]
    fn non_discriminant_t_is_canonical() {
        let value = deserialize_payload(br#"{"t":"other","type":"token"}"#).unwrap();
        assert_eq!(value, json!({"t":"other","type":"token"}));
    }

    #[test]
    fn non_object_json_is_returned_as_is() {
        assert_eq!(deserialize_payload(b"42").unwrap(), json!(42));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let err = deserialize_payload(&[b'{', 0xFF, b'}']).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedEncoding(MalformedReason::InvalidUtf8 { valid_up_to: 1 })
        );
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = deserialize_payload(br#"{"type":"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedEncoding(MalformedReason::InvalidJson { line: 1, .. })
        ));
    }

    #[test]
    fn detect_format_by_discriminant() {
        assert_eq!(detect_format(&json!({"t":"contract"})), PayloadFormat::Compact);
        assert_eq!(detect_format(&json!({"type":"contract"})), PayloadFormat::Canonical);
        assert_eq!(detect_format(&json!("t")), PayloadFormat::Canonical);
    }
}
