use codec::{decode, encode, CodecError, ContractPayload, Payload, Terms, TokenPayload};
use proptest::prelude::*;
use serde_json::Value;
use wire::EncodeError;

const BASES: [&str; 5] = ["🍌", "📜", "❤", "a", "🎉"];

fn did() -> impl Strategy<Value = String> {
    "[a-z0-9]{2,24}".prop_map(|suffix| format!("did:hapa:{suffix}"))
}

fn term_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,16}".prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        prop::collection::vec(any::<u8>(), 0..4).prop_map(Value::from),
    ]
}

fn token() -> impl Strategy<Value = Payload> {
    (
        prop::sample::select(BASES.to_vec()),
        1u64..=u64::MAX,
        did(),
        did(),
        any::<i64>(),
        prop::option::of("[ -~]{0,120}"),
    )
        .prop_map(|(emoji, amount, sender, receiver, timestamp, message)| {
            let mut token = TokenPayload::new(emoji, amount, sender, receiver, timestamp);
            token.message = message;
            Payload::from(token)
        })
}

fn contract() -> impl Strategy<Value = Payload> {
    (
        prop::sample::select(BASES.to_vec()),
        "[a-z_]{1,24}",
        did(),
        prop::option::of(did()),
        any::<i64>(),
        prop::collection::vec(("[a-z]{1,8}", term_value()), 0..5),
    )
        .prop_map(|(emoji, template, sender, receiver, timestamp, terms)| {
            let mut contract = ContractPayload::new(emoji, template, sender, timestamp)
                .with_terms(terms.into_iter().collect::<Terms>());
            contract.receiver = receiver.map(Into::into);
            Payload::from(contract)
        })
}

proptest! {
    #[test]
    fn encode_decode_round_trip(
        payload in prop_oneof![token(), contract()],
        base in prop::sample::select(BASES.to_vec()),
    ) {
        match encode(base, &payload) {
            Ok(encoded) => {
                prop_assert!(encoded.starts_with(base));
                prop_assert_eq!(decode(&encoded).unwrap(), payload);
            }
            Err(CodecError::Encode(EncodeError::PayloadTooLarge { compact_len, limit, .. })) => {
                prop_assert!(compact_len > limit);
            }
            Err(err) => prop_assert!(false, "unexpected error: {err}"),
        }
    }

    #[test]
    fn encoded_length_never_exceeds_ceiling(payload in token()) {
        if let Ok(encoded) = encode("🍌", &payload) {
            prop_assert!(encoded.chars().count() - 1 <= codec::MAX_PAYLOAD_BYTES);
        }
    }

    #[test]
    fn decode_never_panics(text in "\\PC{0,64}") {
        let _ = decode(&text);
    }
}
