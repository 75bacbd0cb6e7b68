//! Canonical and compact JSON wire forms for the hapa emoji codec.
//!
//! This crate turns a [`payload::Payload`] into at most
//! [`MAX_PAYLOAD_BYTES`] of UTF-8 JSON and back. It does not know about
//! variation selectors, only about the bytes they carry.
//!
//! # Design Principles
//!
//! - **Two permanent schemas** - The canonical form uses full field names;
//!   the compact form uses one- and two-letter keys and is chosen only when
//!   the canonical form overflows. Both decode forever.
//! - **Self-describing** - A `t` key holding `"token"` or `"contract"` marks
//!   the compact form; there is no version tag.
//! - **Parse, don't judge** - Deserialization stops at a canonical JSON value;
//!   deciding whether it is a legal payload belongs to the validator.
//!
//! See `WIRE_FORMAT.md` for the byte-level format.

mod compact;
mod deserialize;
mod error;
mod limits;
mod serialize;

pub use compact::COMPACT_TYPE_KEY;
pub use deserialize::{
    deserialize_payload, deserialize_payload_with_format, detect_format, DeserializedPayload,
};
pub use error::{DecodeError, EncodeError, EncodeResult, MalformedReason, WireResult};
pub use limits::{fits_ceiling, MAX_PAYLOAD_BYTES};
pub use serialize::{
    serialize_payload, serialize_payload_with_format, PayloadFormat, SerializedPayload,
};
