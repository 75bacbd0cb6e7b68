//! Byte to variation-selector mapping for the hapa emoji codec.
//!
//! Unicode reserves 256 variation selectors: 16 in the basic block
//! (`U+FE00..=U+FE0F`) and 240 in the supplementary block
//! (`U+E0100..=U+E01EF`). They render as nothing, so one selector per byte
//! gives an invisible alphabet that survives copy/paste as ordinary text.
//!
//! This crate provides [`SelectorWriter`] and [`SelectorReader`] plus the
//! one-shot helpers [`bytes_to_selectors`] and [`selectors_to_bytes`].
//!
//! # Design Principles
//!
//! - **No unsafe code** - Codepoints are built and checked through `char`.
//! - **Codepoint iteration** - Input is walked by scalar value, so a
//!   supplementary selector is never split into surrogate halves.
//! - **Noise tolerant** - Non-selector codepoints are skipped, not rejected.
//! - **No domain knowledge** - This crate knows nothing about payloads or JSON.
//!
//! # Example
//!
//! ```
//! use selectors::{bytes_to_selectors, selectors_to_bytes};
//!
//! let hidden = bytes_to_selectors(b"hi");
//! assert_eq!(hidden.chars().count(), 2);
//!
//! let text = format!("🍌{hidden}");
//! assert_eq!(selectors_to_bytes(&text).unwrap(), b"hi".to_vec());
//! ```

mod error;
mod mapping;
mod reader;
mod writer;

pub use error::{SelectorError, SelectorResult};
pub use mapping::{
    byte_to_selector, is_selector, selector_from_u32, selector_to_byte, VS_BASIC_END,
    VS_BASIC_START, VS_SUPPLEMENT_END, VS_SUPPLEMENT_START,
};
pub use reader::{selectors_to_bytes, selectors_to_bytes_utf16, SelectorReader};
pub use writer::{bytes_to_selectors, SelectorWriter};
