//! Payload serialization with compact fallback.

use std::fmt;

use payload::Payload;

use crate::compact::CompactPayload;
use crate::error::{EncodeError, EncodeResult};
use crate::limits::{fits_ceiling, MAX_PAYLOAD_BYTES};

/// Which key schema a serialized payload uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadFormat {
    /// Full field names.
    Canonical,
    /// Abbreviated keys, used only when the canonical form overflows.
    Compact,
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Canonical => "canonical",
            Self::Compact => "compact",
        };
        write!(f, "{name}")
    }
}

/// Serialized payload bytes together with the schema that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedPayload {
    pub bytes: Vec<u8>,
    pub format: PayloadFormat,
    /// Length of the canonical form, even when the compact form was chosen.
    pub canonical_len: usize,
}

/// Serializes `payload` to at most [`MAX_PAYLOAD_BYTES`] of UTF-8 JSON.
///
/// # Errors
///
/// Returns [`EncodeError::PayloadTooLarge`] if even the compact form overflows.
pub fn serialize_payload(payload: &Payload) -> EncodeResult<Vec<u8>> {
    serialize_payload_with_format(payload).map(|serialized| serialized.bytes)
}

/// Serializes `payload`, reporting which key schema was used.
///
/// The canonical form is tried first; the compact form is produced only if
/// the canonical one exceeds [`MAX_PAYLOAD_BYTES`].
///
/// # Errors
///
/// Returns [`EncodeError::PayloadTooLarge`] if even the compact form overflows.
pub fn serialize_payload_with_format(payload: &Payload) -> EncodeResult<SerializedPayload> {
    let canonical = serde_json::to_vec(payload).map_err(json_error)?;
    let canonical_len = canonical.len();
    if fits_ceiling(canonical_len) {
        return Ok(SerializedPayload {
            bytes: canonical,
            format: PayloadFormat::Canonical,
            canonical_len,
        });
    }

    let compact = serde_json::to_vec(&CompactPayload::from(payload)).map_err(json_error)?;
    if !fits_ceiling(compact.len()) {
        return Err(EncodeError::PayloadTooLarge {
            canonical_len,
            compact_len: compact.len(),
            limit: MAX_PAYLOAD_BYTES,
        });
    }
    Ok(SerializedPayload {
        bytes: compact,
        format: PayloadFormat::Compact,
        canonical_len,
    })
}

#[allow(clippy::needless_pass_by_value)]
fn json_error(err: serde_json::Error) -> EncodeError {
    EncodeError::Json {
        message: err.to_string(),
    }
}
