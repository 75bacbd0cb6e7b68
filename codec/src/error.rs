//! Error types for codec operations.

use std::fmt;

use payload::ValidationError;
use selectors::SelectorError;
use wire::{DecodeError, EncodeError};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while hiding or recovering a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The base emoji is empty or whitespace.
    EmptyBaseEmoji,

    /// Encoded text needs a base character and at least one selector.
    InputTooShort { chars: usize },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// Selector mapping error.
    Selectors(SelectorError),

    /// Payload serialization error.
    Encode(EncodeError),

    /// Recovered bytes are not UTF-8 JSON.
    Decode(DecodeError),

    /// Recovered value is not a legal payload.
    Validation(ValidationError),
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    InputChars,
}

/// Flat error code, stable across versions.
///
/// Hosts that only need the failure class (a UI badge, an exit status)
/// match on this instead of the nested error tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EmptyBaseEmoji,
    PayloadTooLarge,
    InputTooShort,
    EmptyPayload,
    MalformedEncoding,
    UnknownPayloadType,
    InvalidAmount,
    InvalidIdentifier,
    MissingTemplate,
    InvalidTerms,
    LimitsExceeded,
}

impl CodecError {
    /// Returns the flat code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyBaseEmoji => ErrorCode::EmptyBaseEmoji,
            Self::InputTooShort { .. } => ErrorCode::InputTooShort,
            Self::LimitsExceeded { .. } => ErrorCode::LimitsExceeded,
            Self::Selectors(SelectorError::EmptyPayload { .. }) => ErrorCode::EmptyPayload,
            // Raw codepoint conversions only fail on bytes that were never selectors.
            Self::Selectors(SelectorError::InvalidCodepoint { .. }) | Self::Decode(_) => {
                ErrorCode::MalformedEncoding
            }
            // serde_json refusing a typed payload has no closer class.
            Self::Encode(_) => ErrorCode::PayloadTooLarge,
            Self::Validation(err) => match err {
                ValidationError::UnknownPayloadType => ErrorCode::UnknownPayloadType,
                ValidationError::InvalidAmount => ErrorCode::InvalidAmount,
                ValidationError::InvalidIdentifier { .. } => ErrorCode::InvalidIdentifier,
                ValidationError::MissingTemplate => ErrorCode::MissingTemplate,
                ValidationError::InvalidTerms => ErrorCode::InvalidTerms,
            },
        }
    }
}

impl ErrorCode {
    /// Returns the code name, e.g. `"PayloadTooLarge"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyBaseEmoji => "EmptyBaseEmoji",
            Self::PayloadTooLarge => "PayloadTooLarge",
            Self::InputTooShort => "InputTooShort",
            Self::EmptyPayload => "EmptyPayload",
            Self::MalformedEncoding => "MalformedEncoding",
            Self::UnknownPayloadType => "UnknownPayloadType",
            Self::InvalidAmount => "InvalidAmount",
            Self::InvalidIdentifier => "InvalidIdentifier",
            Self::MissingTemplate => "MissingTemplate",
            Self::InvalidTerms => "InvalidTerms",
            Self::LimitsExceeded => "LimitsExceeded",
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBaseEmoji => write!(f, "base emoji is empty"),
            Self::InputTooShort { chars } => {
                write!(f, "input too short: {chars} codepoints, need at least 2")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::Selectors(e) => write!(f, "selector error: {e}"),
            Self::Encode(e) => write!(f, "encode error: {e}"),
            Self::Decode(e) => write!(f, "decode error: {e}"),
            Self::Validation(e) => write!(f, "invalid payload: {e}"),
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InputChars => "input codepoints",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Selectors(e) => Some(e),
            Self::Encode(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SelectorError> for CodecError {
    fn from(err: SelectorError) -> Self {
        Self::Selectors(err)
    }
}

impl From<EncodeError> for CodecError {
    fn from(err: EncodeError) -> Self {
        Self::Encode(err)
    }
}

impl From<DecodeError> for CodecError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<ValidationError> for CodecError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}
