#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        // Non-UTF-8 input still exercises the JSON layer.
        let _ = wire::deserialize_payload(data);
        return;
    };

    if let Ok(payload) = codec::decode(text) {
        // A decoded payload that fits the ceiling re-encodes to itself.
        let base = text.chars().next().map(String::from).unwrap_or_default();
        if let Ok(encoded) = codec::encode(&base, &payload) {
            assert_eq!(codec::decode(&encoded).ok(), Some(payload));
        }
    }
    let _ = codec::decode_unvalidated(text);
    let _ = codec::inspect_encoded(text);
});
