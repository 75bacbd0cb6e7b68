use codec::{decode, encode, inspect_encoded, ContractPayload, Payload, TokenPayload};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn canonical_token() -> Payload {
    Payload::from(
        TokenPayload::new(
            "🍌",
            100,
            "did:hapa:alex123",
            "did:hapa:bob456",
            1_700_000_000_000,
        )
        .with_message("lunch"),
    )
}

fn compact_contract() -> Payload {
    Payload::from(
        ContractPayload::new("📜", "job_contract_v1", "did:hapa:alex123", 1_700_000_000_000)
            .with_receiver("did:hapa:bob456")
            .with_term("description", "Fix the fence on the north side")
            .with_term("rate", 25)
            .with_term("currency", "USD")
            .with_term("hours", 12)
            .with_term("deadline", "2024-06-01"),
    )
}

fn encode_benchmark(c: &mut Criterion) {
    let token = canonical_token();
    let contract = compact_contract();

    c.bench_function("encode_token_canonical", |b| {
        b.iter(|| encode(black_box("🍌"), black_box(&token)))
    });
    c.bench_function("encode_contract_compact", |b| {
        b.iter(|| encode(black_box("📜"), black_box(&contract)))
    });
}

fn decode_benchmark(c: &mut Criterion) {
    let Ok(token) = encode("🍌", &canonical_token()) else {
        return;
    };
    let Ok(contract) = encode("📜", &compact_contract()) else {
        return;
    };

    c.bench_function("decode_token_canonical", |b| {
        b.iter(|| decode(black_box(&token)))
    });
    c.bench_function("decode_contract_compact", |b| {
        b.iter(|| decode(black_box(&contract)))
    });
    c.bench_function("inspect_contract_compact", |b| {
        b.iter(|| inspect_encoded(black_box(&contract)))
    });
}

criterion_group!(benches, encode_benchmark, decode_benchmark);
criterion_main!(benches);
