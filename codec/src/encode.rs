//! Hiding a payload behind a base emoji.

use payload::Payload;
use selectors::SelectorWriter;
use wire::serialize_payload_with_format;

use crate::error::{CodecError, CodecResult};

/// Encodes `payload` as invisible selectors after the first codepoint of `base_emoji`.
///
/// Surrounding whitespace is trimmed from `base_emoji` and only its first
/// codepoint is kept, so a trailing presentation selector such as the
/// `U+FE0F` in "❤️" can never be read back as a payload byte.
///
/// # Errors
///
/// Returns [`CodecError::EmptyBaseEmoji`] if `base_emoji` is blank, or
/// [`CodecError::Encode`] if the payload does not fit the ceiling even in
/// compact form.
///
/// # Example
///
/// ```
/// use codec::{decode, encode, Payload, TokenPayload};
///
/// let payload = Payload::from(TokenPayload::new(
///     "🍌",
///     100,
///     "did:hapa:alex123",
///     "did:hapa:bob456",
///     1_700_000_000_000,
/// ));
/// let encoded = encode("🍌", &payload)?;
/// assert!(encoded.starts_with('🍌'));
/// assert_eq!(decode(&encoded)?, payload);
/// # Ok::<(), codec::CodecError>(())
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(payload), fields(kind = %payload.kind()), err(level = "debug"))
)]
pub fn encode(base_emoji: &str, payload: &Payload) -> CodecResult<String> {
    let base = base_emoji
        .trim()
        .chars()
        .next()
        .ok_or(CodecError::EmptyBaseEmoji)?;
    let serialized = serialize_payload_with_format(payload)?;

    #[cfg(feature = "tracing")]
    if serialized.format == wire::PayloadFormat::Compact {
        tracing::debug!(
            canonical_len = serialized.canonical_len,
            compact_len = serialized.bytes.len(),
            "canonical form over ceiling, using compact form"
        );
    }

    let mut encoded = String::with_capacity(base.len_utf8() + serialized.bytes.len() * 4);
    encoded.push(base);
    let mut writer = SelectorWriter::with_capacity(serialized.bytes.len());
    writer.write_bytes(&serialized.bytes);
    writer.finish_into(&mut encoded);
    Ok(encoded)
}
