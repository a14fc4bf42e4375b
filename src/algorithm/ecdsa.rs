use crate::algorithm::Signer;
use crate::error::{Error, Result};
use crate::keys::{EcdsaCurve, Key};

use ring::rand::SystemRandom;
use ring::signature::{self, EcdsaKeyPair, UnparsedPublicKey};

/// ES256 algorithm (ECDSA with P-256 and SHA-256)
pub struct ES256;

/// ES384 algorithm (ECDSA with P-384 and SHA-384)
pub struct ES384;

impl Signer for ES256 {
    fn algorithm_header_value(&self) -> &str {
        "ES256"
    }

    fn sign(&self, payload: &str, key: &Key) -> Result<Vec<u8>> {
        sign_ecdsa(
            "ES256",
            payload,
            key,
            EcdsaCurve::P256,
            &signature::ECDSA_P256_SHA256_FIXED_SIGNING,
        )
    }

    fn verify(&self, signature: &[u8], payload: &str, key: &Key) -> bool {
        verify_ecdsa(
            signature,
            payload,
            key,
            EcdsaCurve::P256,
            &signature::ECDSA_P256_SHA256_FIXED,
        )
    }
}

impl Signer for ES384 {
    fn algorithm_header_value(&self) -> &str {
        "ES384"
    }

    fn sign(&self, payload: &str, key: &Key) -> Result<Vec<u8>> {
        sign_ecdsa(
            "ES384",
            payload,
            key,
            EcdsaCurve::P384,
            &signature::ECDSA_P384_SHA384_FIXED_SIGNING,
        )
    }

    fn verify(&self, signature: &[u8], payload: &str, key: &Key) -> bool {
        verify_ecdsa(
            signature,
            payload,
            key,
            EcdsaCurve::P384,
            &signature::ECDSA_P384_SHA384_FIXED,
        )
    }
}

/// Sign in the fixed-length R||S form required by RFC 7518 Section 3.4
fn sign_ecdsa(
    name: &str,
    payload: &str,
    key: &Key,
    expected_curve: EcdsaCurve,
    algorithm: &'static signature::EcdsaSigningAlgorithm,
) -> Result<Vec<u8>> {
    let (pkcs8, curve) = key.as_ecdsa_private()?;
    if curve != expected_curve {
        return Err(Error::KeyTypeMismatch {
            algorithm: name.to_string(),
            expected_key_type: format!("ECDSA {expected_curve:?}"),
            actual_key_type: format!("ECDSA {curve:?}"),
        });
    }

    let rng = SystemRandom::new();
    let key_pair = EcdsaKeyPair::from_pkcs8(algorithm, pkcs8, &rng)
        .map_err(|e| Error::KeyRejected(e.to_string()))?;

    key_pair
        .sign(&rng, payload.as_bytes())
        .map(|signature| signature.as_ref().to_vec())
        .map_err(|_| Error::SigningFailed("ECDSA signing failed".to_string()))
}

fn verify_ecdsa(
    signature: &[u8],
    payload: &str,
    key: &Key,
    expected_curve: EcdsaCurve,
    algorithm: &'static dyn signature::VerificationAlgorithm,
) -> bool {
    let ecdsa_key = match key.as_ecdsa_public() {
        Ok(ecdsa_key) => ecdsa_key,
        Err(e) => {
            tracing::debug!(error = %e, "ECDSA verification refused");
            return false;
        }
    };

    if ecdsa_key.curve() != expected_curve {
        tracing::debug!(
            expected = ?expected_curve,
            actual = ?ecdsa_key.curve(),
            "ECDSA verification refused: curve mismatch"
        );
        return false;
    }

    UnparsedPublicKey::new(algorithm, ecdsa_key.as_der())
        .verify(payload.as_bytes(), signature)
        .is_ok()
}
