//! Error types for selector operations.

use std::fmt;

/// Result type for selector operations.
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Errors that can occur while mapping between bytes and variation selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The scanned text contained no variation selectors at all.
    EmptyPayload {
        /// Number of codepoints scanned, none of which were selectors.
        scanned: usize,
    },

    /// A raw codepoint lies outside both variation-selector ranges.
    InvalidCodepoint {
        /// The offending codepoint.
        codepoint: u32,
    },
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload { scanned } => {
                write!(
                    f,
                    "no variation selectors found after scanning {scanned} codepoints"
                )
            }
            Self::InvalidCodepoint { codepoint } => {
                write!(f, "codepoint U+{codepoint:04X} is not a variation selector")
            }
        }
    }
}

impl std::error::Error for SelectorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_empty_payload() {
        let err = SelectorError::EmptyPayload { scanned: 3 };
        let msg = err.to_string();
        assert!(msg.contains("no variation selectors"));
        assert!(msg.contains('3'), "should mention scanned count");
    }

    #[test]
    fn error_display_invalid_codepoint() {
        let err = SelectorError::InvalidCodepoint { codepoint: 0x41 };
        let msg = err.to_string();
        assert!(msg.contains("U+0041"), "should format as a codepoint");
    }

    #[test]
    fn error_equality() {
        let err1 = SelectorError::EmptyPayload { scanned: 1 };
        let err2 = SelectorError::EmptyPayload { scanned: 1 };
        let err3 = SelectorError::EmptyPayload { scanned: 2 };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<SelectorError>();
    }
}
