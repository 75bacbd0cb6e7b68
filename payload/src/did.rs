//! Hapa decentralized identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Literal prefix every hapa identifier starts with.
pub const DID_PREFIX: &str = "did:hapa:";

/// Minimum identifier length, counted in UTF-16 code units.
pub const DID_MIN_LEN: usize = 11;

/// Returns `true` if `did` has the `did:hapa:` prefix and is longer than ten characters.
///
/// This is a format check only. Length is measured in UTF-16 code units so
/// that every identifier accepted by existing clients stays valid.
#[must_use]
pub fn is_valid_hapa_did(did: &str) -> bool {
    did.starts_with(DID_PREFIX) && did.encode_utf16().count() >= DID_MIN_LEN
}

/// A party identifier such as `did:hapa:alex123`.
///
/// Construction does not validate; use [`HapaDid::is_valid`] or the payload
/// validator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HapaDid(String);

impl HapaDid {
    /// Creates a new identifier from any string.
    #[must_use]
    pub fn new(did: impl Into<String>) -> Self {
        Self(did.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the identifier passes the format check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_hapa_did(&self.0)
    }

    /// Consumes the identifier and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for HapaDid {
    fn from(did: String) -> Self {
        Self(did)
    }
}

impl From<&str> for HapaDid {
    fn from(did: &str) -> Self {
        Self(did.to_owned())
    }
}

impl AsRef<str> for HapaDid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HapaDid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
