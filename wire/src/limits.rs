//! Fixed protocol size ceiling.

/// Maximum serialized payload size in bytes.
///
/// One variation selector carries one byte, so this also bounds the number
/// of invisible codepoints after the base emoji. It is a protocol constant,
/// not a per-call setting.
pub const MAX_PAYLOAD_BYTES: usize = 256;

/// Returns `true` if `len` serialized bytes fit under [`MAX_PAYLOAD_BYTES`].
#[must_use]
pub const fn fits_ceiling(len: usize) -> bool {
    len <= MAX_PAYLOAD_BYTES
}
