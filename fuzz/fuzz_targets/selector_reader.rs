#![no_main]

use libfuzzer_sys::fuzz_target;
use selectors::{selectors_to_bytes, selectors_to_bytes_utf16, SelectorReader};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut reader = SelectorReader::new(text);
        let mut recovered = 0usize;
        while reader.next_byte().is_some() {
            recovered += 1;
        }
        assert_eq!(reader.scanned(), text.chars().count());
        assert_eq!(reader.scanned(), recovered + reader.skipped());

        let units: Vec<u16> = text.encode_utf16().collect();
        assert_eq!(selectors_to_bytes(text), selectors_to_bytes_utf16(&units));
    }

    // Raw unit pairs exercise unpaired surrogates.
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let _ = selectors_to_bytes_utf16(&units);
});
