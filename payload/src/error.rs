//! Payload validation errors.

use std::fmt;

use crate::did::{DID_MIN_LEN, DID_PREFIX};

/// Result type for payload validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Which identifier field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierField {
    Sender,
    Receiver,
}

/// Reasons a parsed value is not a legal payload.
///
/// These are reported values: callers decide whether a rejection is fatal
/// or only worth flagging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value matches neither the token nor the contract shape.
    UnknownPayloadType,

    /// Token amount is not a positive integer.
    InvalidAmount,

    /// An identifier does not follow the `did:hapa:` format.
    InvalidIdentifier {
        field: IdentifierField,
        value: String,
    },

    /// Contract template is missing, not a string, or empty.
    MissingTemplate,

    /// Contract terms are not an object.
    InvalidTerms,
}

impl fmt::Display for IdentifierField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sender => "sender",
            Self::Receiver => "receiver",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPayloadType => {
                write!(f, "value matches neither the token nor the contract shape")
            }
            Self::InvalidAmount => write!(f, "token amount must be a positive integer"),
            Self::InvalidIdentifier { field, value } => {
                write!(
                    f,
                    "invalid {field} identifier {value:?}: expected prefix {DID_PREFIX:?} and at least {DID_MIN_LEN} characters"
                )
            }
            Self::MissingTemplate => write!(f, "contract template is missing or empty"),
            Self::InvalidTerms => write!(f, "contract terms must be an object"),
        }
    }
}

impl std::error::Error for ValidationError {}
