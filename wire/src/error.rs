//! Error types for wire format operations.

use std::fmt;

/// Result type for wire decoding.
pub type WireResult<T> = Result<T, DecodeError>;

/// Result type for wire encoding.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that can occur while serializing a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// Both the canonical and the compact form exceed the size ceiling.
    PayloadTooLarge {
        canonical_len: usize,
        compact_len: usize,
        limit: usize,
    },

    /// The JSON serializer refused the payload.
    Json { message: String },
}

/// Errors that can occur while deserializing recovered bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The bytes are not UTF-8 JSON.
    MalformedEncoding(MalformedReason),
}

/// Why recovered bytes could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    InvalidUtf8 {
        valid_up_to: usize,
    },
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },
}

impl EncodeError {
    /// Returns the measured byte length that overflowed, if any.
    #[must_use]
    pub const fn measured_len(&self) -> Option<usize> {
        match self {
            Self::PayloadTooLarge { compact_len, .. } => Some(*compact_len),
            Self::Json { .. } => None,
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PayloadTooLarge {
                canonical_len,
                compact_len,
                limit,
            } => {
                write!(
                    f,
                    "payload too large: {compact_len} bytes after compaction ({canonical_len} canonical), limit is {limit}"
                )
            }
            Self::Json { message } => write!(f, "json serialization failed: {message}"),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEncoding(reason) => write!(f, "malformed encoding: {reason}"),
        }
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "invalid utf-8 after {valid_up_to} valid bytes")
            }
            Self::InvalidJson {
                line,
                column,
                message,
            } => {
                write!(f, "invalid json at {line}:{column}: {message}")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

impl std::error::Error for DecodeError {}
