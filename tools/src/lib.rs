//! Command-line tooling for the hapa emoji codec.
//!
//! This crate provides the pieces behind the `hapa-tools` binary:
//!
//! - Parse slash-command form text into a draft payload
//! - Load payloads from JSON files
//! - Render inspection reports for people and scripts
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what an emoji is carrying.

mod form;
mod report;

pub use form::{parse_form_text, ParsedForm, DEFAULT_RECEIVER, DEFAULT_TEMPLATE};
pub use report::{load_payload_json, report_json};
