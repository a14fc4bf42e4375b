//! Token parsing performance benchmarks
//!
//! Benchmarks parsing with different claim sizes and the cost of each step
//! that follows a parse.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jwtkit::algorithm::hmac::HS256;
use jwtkit::*;

/// Helper to generate test tokens of different sizes
mod helpers {
    use hmac::{Hmac, Mac};
    use jwtkit::utils::base64url;
    use sha2::Sha256;

    pub fn generate_token_with_payload_size(secret: &[u8], payload_size: usize) -> String {
        let header = r#"{"alg":"HS256","typ":"JWT"}"#;

        let mut payload =
            r#"{"sub":"user123","iss":"https://example.com","aud":"my-api","iat":1516239022,"exp":4000000000"#
                .to_string();
        let extra_size = payload_size.saturating_sub(payload.len());
        if extra_size > 0 {
            payload.push_str(",\"data\":\"");
            payload.push_str(&"x".repeat(extra_size.saturating_sub(10)));
            payload.push_str("\"}");
        } else {
            payload.push('}');
        }

        let header_b64 = base64url::encode(header);
        let payload_b64 = base64url::encode(&payload);
        let signing_input = format!("{}.{}", header_b64, payload_b64);

        let mut mac = Hmac::<Sha256>::new_from_slice(secret).unwrap();
        mac.update(signing_input.as_bytes());
        let signature_bytes = mac.finalize().into_bytes();
        let signature_b64 = base64url::encode_bytes(&signature_bytes);

        format!("{}.{}", signing_input, signature_b64)
    }
}

fn bench_parsing_by_size(c: &mut Criterion) {
    use helpers::generate_token_with_payload_size;

    let secret = b"test-secret-key";
    let sizes = vec![64, 256, 1024, 4096, 16384];

    let mut group = c.benchmark_group("parse_by_size");

    for size in sizes {
        let token = generate_token_with_payload_size(secret, size);
        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_function(format!("size_{}", size), |b| {
            b.iter(|| {
                let _ = Parser::new().parse(black_box(&token));
            });
        });
    }

    group.finish();
}

fn bench_parsing_stages(c: &mut Criterion) {
    use helpers::generate_token_with_payload_size;

    let secret = b"test-secret-key";
    let key = Key::symmetric(secret);
    let token_str = generate_token_with_payload_size(secret, 256);
    let token = Parser::new().parse(&token_str).unwrap();

    let mut group = c.benchmark_group("parse_stages");

    group.bench_function("full_parse", |b| {
        b.iter(|| {
            let _ = Parser::new().parse(black_box(&token_str));
        });
    });

    group.bench_function("verify_only", |b| {
        b.iter(|| black_box(token.verify(&HS256, &key)));
    });

    group.bench_function("validate_only", |b| {
        b.iter(|| {
            let mut validator = ClaimsValidator::new()
                .expect_issuer("https://example.com")
                .expect_audience("my-api")
                .at_time(1516239022);
            black_box(token.validate(&mut validator))
        });
    });

    group.bench_function("parse_verify_validate", |b| {
        b.iter(|| {
            let token = Parser::new().parse(black_box(&token_str)).unwrap();
            let mut validator = ClaimsValidator::new().at_time(1516239022);
            black_box((token.verify(&HS256, &key), token.validate(&mut validator)))
        });
    });

    group.finish();
}

fn bench_rejections(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_rejections");

    let wrong_count = "aaaa.bbbb";
    group.bench_function("segment_count", |b| {
        b.iter(|| {
            let _ = Parser::new().parse(black_box(wrong_count));
        });
    });

    let oversized = "a".repeat(128 * 1024);
    group.bench_function("too_large", |b| {
        b.iter(|| {
            let _ = Parser::new().parse(black_box(&oversized));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing_by_size,
    bench_parsing_stages,
    bench_rejections
);
criterion_main!(benches);
