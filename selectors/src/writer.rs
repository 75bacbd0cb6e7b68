//! Selector writer for encoding bytes as invisible codepoints.

use crate::mapping::byte_to_selector;

/// Every supplementary selector is four bytes of UTF-8.
const MAX_SELECTOR_UTF8_LEN: usize = 4;

/// Accumulates variation selectors, one per written byte.
///
/// Call [`finish`](Self::finish) to get the selector string.
#[derive(Debug, Default)]
pub struct SelectorWriter {
    out: String,
    written: usize,
}

impl SelectorWriter {
    /// Creates a new empty `SelectorWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `SelectorWriter` with room for `bytes` selectors.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            out: String::with_capacity(bytes.saturating_mul(MAX_SELECTOR_UTF8_LEN)),
            written: 0,
        }
    }

    /// Returns the number of selectors written so far.
    #[must_use]
    pub const fn selectors_written(&self) -> usize {
        self.written
    }

    /// Writes the selector for a single byte.
    pub fn write_byte(&mut self, byte: u8) {
        self.out.push(byte_to_selector(byte));
        self.written += 1;
    }

    /// Writes one selector per byte, preserving order.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.reserve(bytes.len().saturating_mul(MAX_SELECTOR_UTF8_LEN));
        for &byte in bytes {
            self.write_byte(byte);
        }
    }

    /// Finishes writing and returns the selector string.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    /// Finishes writing and appends the selectors to `buf`.
    pub fn finish_into(self, buf: &mut String) {
        buf.push_str(&self.out);
    }
}

/// Encodes `bytes` as a string of variation selectors.
///
/// Empty input yields an empty string; callers decide whether that is an error.
#[must_use]
pub fn bytes_to_selectors(bytes: &[u8]) -> String {
    let mut writer = SelectorWriter::with_capacity(bytes.len());
    writer.write_bytes(bytes);
    writer.finish()
}
