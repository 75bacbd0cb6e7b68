//! Payload model and validation for the hapa emoji codec.
//!
//! This crate defines what travels inside an emoji:
//! - [`Payload`], a tagged union of [`TokenPayload`] and [`ContractPayload`]
//! - [`HapaDid`], the `did:hapa:` party identifier
//! - [`validate`], which turns an untyped JSON value into a typed payload or
//!   a [`ValidationError`]
//!
//! # Design Principles
//!
//! - **Explicit variants** - The `type` discriminant selects a Rust enum
//!   variant; no runtime type inspection leaks past [`validate`].
//! - **Open terms** - Contract terms are an ordered JSON map, so unknown keys
//!   round-trip untouched.
//! - **Rules are values** - Business-rule failures are returned, never panicked.

mod did;
mod error;
mod model;
mod validate;

pub use did::{is_valid_hapa_did, HapaDid, DID_MIN_LEN, DID_PREFIX};
pub use error::{IdentifierField, ValidationError, ValidationResult};
pub use model::{ContractPayload, Payload, PayloadKind, Terms, TokenPayload};
pub use validate::{classify, validate};
