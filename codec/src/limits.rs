//! Limits for codec-level decoding.

/// Resource bounds enforced before a decode scans its input.
///
/// The payload ceiling itself is the protocol constant
/// [`wire::MAX_PAYLOAD_BYTES`] and is not configurable here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum number of codepoints in the encoded text, base included.
    pub max_input_chars: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_input_chars: 64 * 1024,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_input_chars: 1024,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_input_chars: usize::MAX,
        }
    }
}
