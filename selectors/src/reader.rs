//! Selector reader that recovers bytes while skipping unrelated codepoints.

use std::str::Chars;

use crate::error::{SelectorError, SelectorResult};
use crate::mapping::selector_to_byte;

/// Walks a string by codepoint and yields the bytes carried by its variation selectors.
///
/// Codepoints outside both selector blocks are skipped, not rejected: text
/// around or between the selectors is tolerated and counted in
/// [`skipped`](Self::skipped).
#[derive(Debug, Clone)]
pub struct SelectorReader<'a> {
    chars: Chars<'a>,
    scanned: usize,
    skipped: usize,
}

impl<'a> SelectorReader<'a> {
    /// Creates a new `SelectorReader` over `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            scanned: 0,
            skipped: 0,
        }
    }

    /// Returns the number of codepoints consumed so far.
    #[must_use]
    pub const fn scanned(&self) -> usize {
        self.scanned
    }

    /// Returns the number of non-selector codepoints skipped so far.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns the next recovered byte, or `None` once the text is exhausted.
    pub fn next_byte(&mut self) -> Option<u8> {
        for ch in self.chars.by_ref() {
            self.scanned += 1;
            match selector_to_byte(ch) {
                Some(byte) => return Some(byte),
                None => self.skipped += 1,
            }
        }
        None
    }

    /// Reads every remaining selector.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::EmptyPayload`] if no selector was recovered.
    pub fn read_to_end(&mut self) -> SelectorResult<Vec<u8>> {
        let mut bytes = Vec::new();
        while let Some(byte) = self.next_byte() {
            bytes.push(byte);
        }
        if bytes.is_empty() {
            return Err(SelectorError::EmptyPayload {
                scanned: self.scanned,
            });
        }
        Ok(bytes)
    }
}

impl Iterator for SelectorReader<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_byte()
    }
}

/// Recovers the bytes carried by the variation selectors in `text`.
///
/// # Errors
///
/// Returns [`SelectorError::EmptyPayload`] if `text` holds no selectors.
pub fn selectors_to_bytes(text: &str) -> SelectorResult<Vec<u8>> {
    SelectorReader::new(text).read_to_end()
}

/// Recovers bytes from raw UTF-16 code units.
///
/// A surrogate pair is consumed as one codepoint. Unpaired surrogates are
/// skipped like any other non-selector codepoint.
///
/// # Errors
///
/// Returns [`SelectorError::EmptyPayload`] if `units` holds no selectors.
pub fn selectors_to_bytes_utf16(units: &[u16]) -> SelectorResult<Vec<u8>> {
    let mut scanned = 0usize;
    let bytes: Vec<u8> = char::decode_utf16(units.iter().copied())
        .inspect(|_| scanned += 1)
        .filter_map(|decoded| decoded.ok().and_then(selector_to_byte))
        .collect();
    if bytes.is_empty() {
        return Err(SelectorError::EmptyPayload { scanned });
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::bytes_to_selectors;

    #[test]
    fn empty_text_is_empty_payload() {
        assert_eq!(
            selectors_to_bytes(""),
            Err(SelectorError::EmptyPayload { scanned: 0 })
        );
    }

    #[test]
    fn noise_only_is_empty_payload() {
        assert_eq!(
            selectors_to_bytes("hello"),
            Err(SelectorError::EmptyPayload { scanned: 5 })
        );
    }

    #[test]
    fn reads_both_blocks() {
        let bytes = selectors_to_bytes("\u{FE00}\u{FE0F}\u{E0100}\u{E01EF}").unwrap();
        assert_eq!(bytes, vec![0, 15, 16, 255]);
    }

    #[test]
    fn skips_interleaved_noise() {
        let mut text = String::from("a");
        text.push('\u{E0142}');
        text.push_str(" 🍌\u{200D}");
        text.push('\u{FE07}');
        text.push('z');

        let mut reader = SelectorReader::new(&text);
        assert_eq!(reader.read_to_end().unwrap(), vec![0x52, 7]);
        assert_eq!(reader.scanned(), 7);
        assert_eq!(reader.skipped(), 5);
    }

    #[test]
    fn reader_is_an_iterator() {
        let text = bytes_to_selectors(&[1, 2, 3]);
        let collected: Vec<u8> = SelectorReader::new(&text).collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn utf16_surrogate_pair_is_one_byte() {
        let units: Vec<u16> = bytes_to_selectors(&[200]).encode_utf16().collect();
        assert_eq!(units.len(), 2);
        assert_eq!(selectors_to_bytes_utf16(&units).unwrap(), vec![200]);
    }

    #[test]
    fn utf16_skips_unpaired_surrogates() {
        let mut units = vec![0xD83C];
        units.extend(bytes_to_selectors(&[0, 42]).encode_utf16());
        units.push(0xDC00);
        assert_eq!(selectors_to_bytes_utf16(&units).unwrap(), vec![0, 42]);
    }

    #[test]
    fn utf16_empty_payload() {
        let units: Vec<u16> = "🍌".encode_utf16().collect();
        assert_eq!(
            selectors_to_bytes_utf16(&units),
            Err(SelectorError::EmptyPayload { scanned: 1 })
        );
    }
}
