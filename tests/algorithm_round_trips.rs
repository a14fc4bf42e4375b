//! Build, serialize, parse and verify tokens with every algorithm
//!
//! Each test signs with the Builder, sends the token through its string form
//! and checks that the parsed token verifies and carries the same claims.

use jwtkit::algorithm::hmac::{HS256, HS384, HS512};
use jwtkit::algorithm::none::NoneSigner;
use jwtkit::*;

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

fn sample_builder() -> Builder {
    let now = now();
    Builder::new()
        .issuer("https://auth.example.com")
        .subject("user123")
        .audience("my-api")
        .issued_at(now)
        .not_before(now)
        .expires_at(now + 3600)
        .id("token-1")
        .claim("scope", "read:all")
}

fn sample_validator() -> ClaimsValidator {
    ClaimsValidator::new()
        .expect_issuer("https://auth.example.com")
        .expect_audience("my-api")
        .expect_id("token-1")
        .require(RegisteredName::Expiration)
        .max_age(60)
}

/// Sign, serialize, parse, then verify and validate the parsed token
fn round_trip<S: Signer + ?Sized>(signer: &S, signing_key: &Key, verifying_key: &Key) -> Token {
    let built = sample_builder().build(signer, signing_key).unwrap();
    let wire = built.token();

    let parsed = Parser::new().parse(&wire).unwrap();
    assert_eq!(parsed, built);
    assert_eq!(parsed.token(), wire);
    assert_eq!(parsed.algorithm(), Some(signer.algorithm_header_value()));

    assert!(parsed.verify(signer, verifying_key));
    assert!(parsed.validate(&mut sample_validator()).is_empty());

    assert_eq!(parsed.subject(), Some("user123"));
    assert_eq!(parsed.claims().get_str("scope"), Some("read:all"));
    parsed
}

// ============================================================================
// HMAC
// ============================================================================

#[test]
fn test_hmac_round_trips() {
    let key = Key::symmetric(b"a-secret-long-enough-for-hs512-use");

    let token = round_trip(&HS256, &key, &key);
    assert_eq!(token.signature().hash().len(), 32);

    let token = round_trip(&HS384, &key, &key);
    assert_eq!(token.signature().hash().len(), 48);

    let token = round_trip(&HS512, &key, &key);
    assert_eq!(token.signature().hash().len(), 64);
}

#[test]
fn test_hmac_wrong_secret() {
    let token = sample_builder()
        .build(&HS256, &Key::symmetric(b"secret-one"))
        .unwrap();
    let parsed: Token = token.token().parse().unwrap();
    assert!(!parsed.verify(&HS256, &Key::symmetric(b"secret-two")));
}

#[test]
fn test_hmac_empty_secret() {
    let key = Key::symmetric(Vec::new());
    round_trip(&HS256, &key, &key);
}

// ============================================================================
// Numeric claims
// ============================================================================

fn assert_floats_survive(values: &[f64]) {
    let key = Key::symmetric(b"secret");
    for chunk in values.chunks(1000) {
        let mut builder = Builder::new().claim("exp", chunk[0]);
        for (i, value) in chunk.iter().enumerate() {
            builder = builder.claim(format!("v{i}"), *value);
        }

        let built = builder.build(&HS256, &key).unwrap();
        let parsed: Token = built.token().parse().unwrap();
        assert_eq!(parsed.claims().get("exp"), built.claims().get("exp"));
        for (i, value) in chunk.iter().enumerate() {
            let decoded = parsed.claims().get(&format!("v{i}")).and_then(|v| v.as_f64());
            assert_eq!(decoded, Some(*value), "claim v{i}");
        }
        assert_eq!(parsed, built);
    }
}

#[test]
fn test_fractional_timestamps_round_trip() {
    let values: Vec<f64> = (0..20_000)
        .map(|i| 1_700_000_000.0 + i as f64 * 0.001 + 1e-7 * (i % 7) as f64)
        .collect();
    assert_floats_survive(&values);
}

#[test]
fn test_arbitrary_floats_round_trip() {
    let values: Vec<f64> = std::iter::repeat_with(|| f64::from_bits(rand::random::<u64>()))
        .filter(|v| v.is_finite())
        .take(20_000)
        .collect();
    assert_floats_survive(&values);
}

// ============================================================================
// Unsigned
// ============================================================================

#[test]
fn test_none_round_trip() {
    let key = Key::symmetric(Vec::new());
    let token = round_trip(&NoneSigner, &key, &key);
    assert!(token.signature().is_empty());
    assert!(token.token().ends_with('.'));
}

// ============================================================================
// Dispatch by alg header
// ============================================================================

#[test]
fn test_dispatch_from_alg_header() {
    let key = Key::symmetric(b"secret");
    for signer in [AlgorithmId::HS256, AlgorithmId::HS384, AlgorithmId::HS512].map(|a| a.signer()) {
        let token: Token = sample_builder()
            .build(signer.as_ref(), &key)
            .unwrap()
            .token()
            .parse()
            .unwrap();

        let declared: AlgorithmId = token.algorithm().unwrap().parse().unwrap();
        assert!(token.verify(declared.signer().as_ref(), &key));
    }
}

// ============================================================================
// RSA
// ============================================================================

#[cfg(feature = "rsa")]
mod rsa_algorithms {
    use super::*;
    use jwtkit::algorithm::rsa::{RS256, RS384, RS512};

    // Returns (public key, private key)
    fn generate_rsa_keys() -> (Key, Key) {
        use ::rsa::{pkcs8::EncodePrivateKey, RsaPrivateKey};
        use ring::signature::RsaKeyPair;

        let mut rng = rand::thread_rng();
        let private = RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key");
        let pkcs8 = private
            .to_pkcs8_der()
            .expect("Failed to serialize to PKCS#8")
            .as_bytes()
            .to_vec();

        let key_pair = RsaKeyPair::from_pkcs8(&pkcs8).expect("ring rejected key");
        let public = key_pair.public().as_ref().to_vec();

        (Key::rsa_public(public), Key::rsa_private(pkcs8))
    }

    #[test]
    fn test_rsa_round_trips() {
        let (public, private) = generate_rsa_keys();

        for signer in [&RS256 as &dyn Signer, &RS384, &RS512] {
            let token = round_trip(signer, &private, &public);
            assert_eq!(token.signature().hash().len(), 256);
        }
    }

    #[test]
    fn test_rsa_wrong_public_key() {
        let (_, private) = generate_rsa_keys();
        let (other_public, _) = generate_rsa_keys();

        let token: Token = sample_builder()
            .build(&RS256, &private)
            .unwrap()
            .token()
            .parse()
            .unwrap();
        assert!(!token.verify(&RS256, &other_public));
    }

    #[test]
    fn test_rsa_token_rejected_by_hmac_signer() {
        let (public, private) = generate_rsa_keys();
        let token = sample_builder().build(&RS256, &private).unwrap();
        assert!(!token.verify(&HS256, &public));
    }

    #[test]
    fn test_rsa_signing_needs_private_key() {
        let (public, _) = generate_rsa_keys();
        assert!(matches!(
            sample_builder().build(&RS256, &public),
            Err(Error::KeyTypeMismatch { .. })
        ));
    }
}

// ============================================================================
// ECDSA
// ============================================================================

#[cfg(feature = "ecdsa")]
mod ecdsa_algorithms {
    use super::*;
    use jwtkit::algorithm::ecdsa::{ES256, ES384};
    use ring::rand::SystemRandom;
    use ring::signature::{EcdsaKeyPair, KeyPair};

    // Returns (public key, private key)
    fn generate_ecdsa_keys(curve: EcdsaCurve) -> (Key, Key) {
        let rng = SystemRandom::new();
        let alg = match curve {
            EcdsaCurve::P256 => &ring::signature::ECDSA_P256_SHA256_FIXED_SIGNING,
            EcdsaCurve::P384 => &ring::signature::ECDSA_P384_SHA384_FIXED_SIGNING,
        };

        let pkcs8 = EcdsaKeyPair::generate_pkcs8(alg, &rng).expect("Failed to generate key");
        let key_pair = EcdsaKeyPair::from_pkcs8(alg, pkcs8.as_ref(), &rng).expect("Failed to parse key");
        let public = key_pair.public_key().as_ref().to_vec();

        (
            Key::ecdsa_public(public, curve),
            Key::ecdsa_private(pkcs8.as_ref().to_vec(), curve),
        )
    }

    #[test]
    fn test_es256_round_trip() {
        let (public, private) = generate_ecdsa_keys(EcdsaCurve::P256);
        let token = round_trip(&ES256, &private, &public);
        assert_eq!(token.signature().hash().len(), 64);
    }

    #[test]
    fn test_es384_round_trip() {
        let (public, private) = generate_ecdsa_keys(EcdsaCurve::P384);
        let token = round_trip(&ES384, &private, &public);
        assert_eq!(token.signature().hash().len(), 96);
    }

    #[test]
    fn test_ecdsa_curve_mismatch() {
        let (public, private) = generate_ecdsa_keys(EcdsaCurve::P384);

        // Signing refuses the wrong curve, verification just fails
        assert!(sample_builder().build(&ES256, &private).is_err());

        let token = sample_builder().build(&ES384, &private).unwrap();
        let (p256_public, _) = generate_ecdsa_keys(EcdsaCurve::P256);
        assert!(!token.verify(&ES384, &p256_public));
        assert!(token.verify(&ES384, &public));
    }

    #[test]
    fn test_ecdsa_signatures_are_randomized() {
        let (public, private) = generate_ecdsa_keys(EcdsaCurve::P256);
        let builder = sample_builder();
        let first = builder.build(&ES256, &private).unwrap();
        let second = builder.build(&ES256, &private).unwrap();

        assert_eq!(first.payload(), second.payload());
        assert_ne!(first.signature(), second.signature());
        assert!(first.verify(&ES256, &public));
        assert!(second.verify(&ES256, &public));
    }
}
