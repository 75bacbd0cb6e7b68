//! Single-symbol mapping between byte values and variation selectors.

use crate::error::{SelectorError, SelectorResult};

/// First codepoint of the basic variation-selector block (VS1).
pub const VS_BASIC_START: u32 = 0xFE00;

/// Last codepoint of the basic variation-selector block (VS16).
pub const VS_BASIC_END: u32 = 0xFE0F;

/// First codepoint of the supplementary variation-selector block (VS17).
pub const VS_SUPPLEMENT_START: u32 = 0xE0100;

/// Last codepoint of the supplementary variation-selector block (VS256).
pub const VS_SUPPLEMENT_END: u32 = 0xE01EF;

/// Number of byte values carried by the basic block.
const BASIC_COUNT: u32 = VS_BASIC_END - VS_BASIC_START + 1;

/// Selector for every byte value, indexed by the byte.
const SELECTOR_TABLE: [char; 256] = build_table();

const fn build_table() -> [char; 256] {
    let mut table = ['\0'; 256];
    let mut byte: u32 = 0;
    while byte < 256 {
        let codepoint = if byte < BASIC_COUNT {
            VS_BASIC_START + byte
        } else {
            VS_SUPPLEMENT_START + (byte - BASIC_COUNT)
        };
        table[byte as usize] = match char::from_u32(codepoint) {
            Some(selector) => selector,
            None => panic!("variation selector ranges must be scalar values"),
        };
        byte += 1;
    }
    table
}

/// Returns the variation selector that carries `byte`.
///
/// Bytes `0..=15` map to `U+FE00..=U+FE0F`; bytes `16..=255` map to
/// `U+E0100..=U+E01EF`.
#[must_use]
pub const fn byte_to_selector(byte: u8) -> char {
    SELECTOR_TABLE[byte as usize]
}

/// Returns the byte carried by `selector`, or `None` if it is not a variation selector.
#[must_use]
pub fn selector_to_byte(selector: char) -> Option<u8> {
    let codepoint = u32::from(selector);
    let value = match codepoint {
        VS_BASIC_START..=VS_BASIC_END => codepoint - VS_BASIC_START,
        VS_SUPPLEMENT_START..=VS_SUPPLEMENT_END => codepoint - VS_SUPPLEMENT_START + BASIC_COUNT,
        _ => return None,
    };
    u8::try_from(value).ok()
}

/// Returns `true` if `ch` lies in either variation-selector block.
#[must_use]
pub fn is_selector(ch: char) -> bool {
    selector_to_byte(ch).is_some()
}

/// Maps a raw codepoint to its byte value.
///
/// # Errors
///
/// Returns [`SelectorError::InvalidCodepoint`] if `codepoint` is not a scalar
/// value or lies outside both variation-selector blocks.
pub fn selector_from_u32(codepoint: u32) -> SelectorResult<u8> {
    char::from_u32(codepoint)
        .and_then(selector_to_byte)
        .ok_or(SelectorError::InvalidCodepoint { codepoint })
}
