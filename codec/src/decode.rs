//! Recovering a payload from encoded text.

use payload::{validate, Payload};
use selectors::SelectorReader;
use serde_json::Value;
use wire::{deserialize_payload_with_format, DeserializedPayload};

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;

/// Decodes and validates the payload hidden in `text` using default limits.
///
/// The first codepoint is the visible base and is never read as payload.
/// Non-selector codepoints after it are skipped.
///
/// # Errors
///
/// Returns [`CodecError::InputTooShort`] for fewer than two codepoints,
/// [`CodecError::Selectors`] if no selector follows the base,
/// [`CodecError::Decode`] if the recovered bytes are not UTF-8 JSON, or
/// [`CodecError::Validation`] if the value is not a legal payload.
pub fn decode(text: &str) -> CodecResult<Payload> {
    decode_with_limits(text, &CodecLimits::default())
}

/// Decodes and validates the payload hidden in `text`.
///
/// # Errors
///
/// As [`decode`], plus [`CodecError::LimitsExceeded`] if `text` is longer
/// than `limits.max_input_chars` codepoints.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(text, limits), fields(text_len = text.len()), err(level = "debug"))
)]
pub fn decode_with_limits(text: &str, limits: &CodecLimits) -> CodecResult<Payload> {
    let recovered = recover(text, limits)?;
    let payload = validate(&recovered.payload.value)?;
    Ok(payload)
}

/// Decodes the value hidden in `text` without validating it.
///
/// Compact form is expanded to canonical keys. Unknown top-level keys of a
/// canonical payload are kept. Use this to show a payload that failed
/// validation alongside the reason.
///
/// # Errors
///
/// As [`decode`], minus validation failures.
pub fn decode_unvalidated(text: &str) -> CodecResult<Value> {
    recover(text, &CodecLimits::default()).map(|recovered| recovered.payload.value)
}

/// Everything recovered from encoded text before validation.
#[derive(Debug)]
pub(crate) struct Recovered {
    pub base: char,
    pub byte_len: usize,
    pub skipped: usize,
    pub payload: DeserializedPayload,
}

/// Splits off the base codepoint and parses the selector tail.
pub(crate) fn recover(text: &str, limits: &CodecLimits) -> CodecResult<Recovered> {
    let chars = text.chars().count();
    if chars > limits.max_input_chars {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::InputChars,
            limit: limits.max_input_chars,
            actual: chars,
        });
    }

    if chars < 2 {
        return Err(CodecError::InputTooShort { chars });
    }
    let mut codepoints = text.chars();
    let Some(base) = codepoints.next() else {
        return Err(CodecError::InputTooShort { chars });
    };

    let mut reader = SelectorReader::new(codepoints.as_str());
    let bytes = reader.read_to_end()?;
    let skipped = reader.skipped();

    #[cfg(feature = "tracing")]
    if skipped > 0 {
        tracing::trace!(skipped, "skipped non-selector codepoints");
    }

    let payload = deserialize_payload_with_format(&bytes)?;
    Ok(Recovered {
        base,
        byte_len: bytes.len(),
        skipped,
        payload,
    })
}
