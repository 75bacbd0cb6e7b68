//! Token and contract payload types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::did::HapaDid;

/// Open, ordered contract terms. Unknown keys are legal and preserved.
pub type Terms = serde_json::Map<String, Value>;

/// Payload variant discriminant, as written in the `type` / `t` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    Token,
    Contract,
}

impl PayloadKind {
    /// Returns the wire discriminant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Contract => "contract",
        }
    }

    /// Parses a wire discriminant. Matching is exact.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "token" => Some(Self::Token),
            "contract" => Some(Self::Contract),
            _ => None,
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured payload carried inside an emoji.
///
/// Serializes to the canonical JSON form with a leading `type` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Payload {
    Token(TokenPayload),
    Contract(ContractPayload),
}

/// A token transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub emoji: String,
    pub amount: u64,
    pub sender: HapaDid,
    pub receiver: HapaDid,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A contract record instantiated from a named template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractPayload {
    pub emoji: String,
    pub template: String,
    pub sender: HapaDid,
    /// Absent for unilateral contracts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<HapaDid>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default)]
    pub terms: Terms,
}

impl Payload {
    /// Returns the variant discriminant.
    #[must_use]
    pub const fn kind(&self) -> PayloadKind {
        match self {
            Self::Token(_) => PayloadKind::Token,
            Self::Contract(_) => PayloadKind::Contract,
        }
    }

    /// Returns the display emoji recorded in the payload.
    #[must_use]
    pub fn emoji(&self) -> &str {
        match self {
            Self::Token(token) => &token.emoji,
            Self::Contract(contract) => &contract.emoji,
        }
    }

    #[must_use]
    pub const fn sender(&self) -> &HapaDid {
        match self {
            Self::Token(token) => &token.sender,
            Self::Contract(contract) => &contract.sender,
        }
    }

    #[must_use]
    pub const fn receiver(&self) -> Option<&HapaDid> {
        match self {
            Self::Token(token) => Some(&token.receiver),
            Self::Contract(contract) => contract.receiver.as_ref(),
        }
    }

    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        match self {
            Self::Token(token) => token.timestamp,
            Self::Contract(contract) => contract.timestamp,
        }
    }
}

impl From<TokenPayload> for Payload {
    fn from(token: TokenPayload) -> Self {
        Self::Token(token)
    }
}

impl From<ContractPayload> for Payload {
    fn from(contract: ContractPayload) -> Self {
        Self::Contract(contract)
    }
}

impl TokenPayload {
    /// Creates a token transfer without a message.
    #[must_use]
    pub fn new(
        emoji: impl Into<String>,
        amount: u64,
        sender: impl Into<HapaDid>,
        receiver: impl Into<HapaDid>,
        timestamp: i64,
    ) -> Self {
        Self {
            emoji: emoji.into(),
            amount,
            sender: sender.into(),
            receiver: receiver.into(),
            timestamp,
            message: None,
        }
    }

    /// Attaches a message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ContractPayload {
    /// Creates a unilateral contract with empty terms.
    #[must_use]
    pub fn new(
        emoji: impl Into<String>,
        template: impl Into<String>,
        sender: impl Into<HapaDid>,
        timestamp: i64,
    ) -> Self {
        Self {
            emoji: emoji.into(),
            template: template.into(),
            sender: sender.into(),
            receiver: None,
            timestamp,
            terms: Terms::new(),
        }
    }

    /// Sets the counterparty.
    #[must_use]
    pub fn with_receiver(mut self, receiver: impl Into<HapaDid>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Appends a term, replacing any existing value under `key`.
    #[must_use]
    pub fn with_term(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.terms.insert(key.into(), value.into());
        self
    }

    /// Replaces all terms.
    #[must_use]
    pub fn with_terms(mut self, terms: Terms) -> Self {
        self.terms = terms;
        self
    }
}
