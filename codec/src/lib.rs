//! Hide token and contract payloads inside a single emoji.
//!
//! This is the main codec crate that ties together selectors, payload, and
//! wire. A payload is serialized to at most [`MAX_PAYLOAD_BYTES`] of JSON,
//! each byte becomes one invisible variation selector, and the selectors are
//! appended after a visible base emoji. The result survives copy/paste as
//! ordinary text.
//!
//! # Features
//!
//! - [`encode`] / [`decode`] around a base emoji
//! - Compact JSON fallback when the canonical form overflows
//! - [`decode_unvalidated`] and [`inspect_encoded`] for advisory display
//! - Optional `tracing` instrumentation (cargo feature `tracing`)
//!
//! # Design Principles
//!
//! - **Stateless** - Every call is a pure transformation; callers may share
//!   nothing and need no locking.
//! - **Exact recovery** - Decoding yields exactly the bytes that were encoded
//!   or fails as a whole. There is no confidentiality and no tamper evidence.
//! - **Noise tolerant** - Non-selector codepoints after the base are skipped.
//! - **Bounded** - Input length is checked against [`CodecLimits`] before any
//!   scanning.

mod decode;
mod encode;
mod error;
mod inspect;
mod limits;

pub use decode::{decode, decode_unvalidated, decode_with_limits};
pub use encode::encode;
pub use error::{CodecError, CodecResult, ErrorCode, LimitKind};
pub use inspect::{inspect_encoded, InspectReport};
pub use limits::CodecLimits;
pub use payload::{
    validate, ContractPayload, HapaDid, IdentifierField, Payload, PayloadKind, Terms,
    TokenPayload, ValidationError,
};
pub use wire::{PayloadFormat, MAX_PAYLOAD_BYTES};
