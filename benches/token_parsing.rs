//! Token parsing performance benchmarks
//!
//! Measures the full pipeline for different payload sizes, each pipeline
//! stage on its own, and the cost of rejecting bad tokens.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use jwtparse::*;

const SECRET: &[u8] = b"test-secret-key";
const NOW: i64 = 1_700_000_000;

/// Helper to generate test tokens of different sizes
mod helpers {
    use jwtparse::algorithm::{hmac, AlgorithmId};
    use jwtparse::signature::canonical_signing_input;
    use jwtparse::{Claims, Header};

    pub fn generate_token_with_payload_size(secret: &[u8], payload_size: usize) -> String {
        let header = Header {
            token_type: "JWT".to_string(),
            ..Header::new("HS256")
        };
        let claims = Claims {
            issuer: "https://example.com".to_string(),
            subject: "user123".to_string(),
            issued_at: super::NOW,
            expiration: super::NOW + 3600,
            data: Some(serde_json::Value::String("x".repeat(payload_size))),
            ..Default::default()
        };

        let signing_input = canonical_signing_input(&header, &claims).unwrap();
        let signature = hmac::sign(AlgorithmId::HS256, &signing_input, secret).unwrap();
        format!("{}.{}", signing_input, signature)
    }
}

fn bench_parsing_by_size(c: &mut Criterion) {
    use helpers::generate_token_with_payload_size;

    let parser = TokenParser::new(Key::symmetric(SECRET));
    let sizes = vec![64, 256, 1024, 4096, 16384];

    let mut group = c.benchmark_group("parse_by_size");

    for size in sizes {
        let token = generate_token_with_payload_size(SECRET, size);
        group.throughput(Throughput::Bytes(token.len() as u64));

        for (name, mode) in [
            ("canonical", SigningInput::Canonical),
            ("verbatim", SigningInput::Verbatim),
        ] {
            let options = ParseOptions::new().signing_input(mode);
            group.bench_function(format!("{}_{}", name, size), |b| {
                b.iter(|| parser.parse_at(black_box(&token), &options, NOW));
            });
        }
    }

    group.finish();
}

fn bench_parsing_stages(c: &mut Criterion) {
    use helpers::generate_token_with_payload_size;

    let token = generate_token_with_payload_size(SECRET, 256);
    let raw = RawToken::split(&token).unwrap();
    let header = raw.decode_header().unwrap();
    let claims = raw.decode_claims().unwrap();
    let key = Key::symmetric(SECRET);

    let mut group = c.benchmark_group("parse_stages");

    group.bench_function("split", |b| {
        b.iter(|| RawToken::split(black_box(&token)));
    });

    group.bench_function("decode", |b| {
        b.iter(|| {
            let raw = black_box(raw);
            (raw.decode_header(), raw.decode_claims())
        });
    });

    group.bench_function("verify_signature", |b| {
        b.iter(|| {
            signature::verify(
                black_box(&raw),
                &header,
                &claims,
                &key,
                SigningInput::Canonical,
            )
        });
    });

    let all_required = ParseOptions::new()
        .require_issuer()
        .require_subject()
        .require_data();
    group.bench_function("structural_checks", |b| {
        b.iter(|| validation::structural::check(black_box(&header), &claims, &all_required));
    });

    group.bench_function("temporal_checks", |b| {
        b.iter(|| validation::temporal::check(black_box(&claims), NOW));
    });

    group.finish();
}

fn bench_invalid_tokens(c: &mut Criterion) {
    let parser = TokenParser::new(Key::symmetric(SECRET));
    let valid = helpers::generate_token_with_payload_size(SECRET, 64);
    let (signing_input, _) = valid.rsplit_once('.').unwrap();
    let bad_signature = format!("{}.AAAA", signing_input);

    let mut group = c.benchmark_group("parse_invalid");

    group.bench_function("malformed", |b| {
        b.iter(|| parser.parse_at(black_box("only.two"), &ParseOptions::DEFAULT, NOW));
    });

    group.bench_function("bad_base64", |b| {
        b.iter(|| parser.parse_at(black_box("!!!.!!!.!!!"), &ParseOptions::DEFAULT, NOW));
    });

    group.bench_function("bad_signature", |b| {
        b.iter(|| parser.parse_at(black_box(&bad_signature), &ParseOptions::DEFAULT, NOW));
    });

    group.bench_function("expired", |b| {
        b.iter(|| parser.parse_at(black_box(&valid), &ParseOptions::DEFAULT, NOW + 7200));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing_by_size,
    bench_parsing_stages,
    bench_invalid_tokens
);
criterion_main!(benches);
