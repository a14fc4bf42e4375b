use crate::algorithm::Signer;
use crate::error::{Error, Result};
use crate::keys::Key;

use ring::rand::SystemRandom;
use ring::signature::{self, RsaKeyPair, UnparsedPublicKey};

/// RS256 algorithm (RSA PKCS#1 v1.5 with SHA-256)
pub struct RS256;

/// RS384 algorithm (RSA PKCS#1 v1.5 with SHA-384)
pub struct RS384;

/// RS512 algorithm (RSA PKCS#1 v1.5 with SHA-512)
pub struct RS512;

impl Signer for RS256 {
    fn algorithm_header_value(&self) -> &str {
        "RS256"
    }

    fn sign(&self, payload: &str, key: &Key) -> Result<Vec<u8>> {
        sign_rsa(payload, key, &signature::RSA_PKCS1_SHA256)
    }

    fn verify(&self, signature: &[u8], payload: &str, key: &Key) -> bool {
        verify_rsa(
            signature,
            payload,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA256,
        )
    }
}

impl Signer for RS384 {
    fn algorithm_header_value(&self) -> &str {
        "RS384"
    }

    fn sign(&self, payload: &str, key: &Key) -> Result<Vec<u8>> {
        sign_rsa(payload, key, &signature::RSA_PKCS1_SHA384)
    }

    fn verify(&self, signature: &[u8], payload: &str, key: &Key) -> bool {
        verify_rsa(
            signature,
            payload,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA384,
        )
    }
}

impl Signer for RS512 {
    fn algorithm_header_value(&self) -> &str {
        "RS512"
    }

    fn sign(&self, payload: &str, key: &Key) -> Result<Vec<u8>> {
        sign_rsa(payload, key, &signature::RSA_PKCS1_SHA512)
    }

    fn verify(&self, signature: &[u8], payload: &str, key: &Key) -> bool {
        verify_rsa(
            signature,
            payload,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA512,
        )
    }
}

fn sign_rsa(
    payload: &str,
    key: &Key,
    encoding: &'static dyn signature::RsaEncoding,
) -> Result<Vec<u8>> {
    let pkcs8 = key.as_rsa_private()?;
    let key_pair = RsaKeyPair::from_pkcs8(pkcs8).map_err(|e| Error::KeyRejected(e.to_string()))?;

    let rng = SystemRandom::new();
    let mut signature = vec![0u8; key_pair.public().modulus_len()];
    key_pair
        .sign(encoding, &rng, payload.as_bytes(), &mut signature)
        .map_err(|_| Error::SigningFailed("RSA signing failed".to_string()))?;

    Ok(signature)
}

fn verify_rsa(
    signature: &[u8],
    payload: &str,
    key: &Key,
    algorithm: &'static dyn signature::VerificationAlgorithm,
) -> bool {
    let rsa_key = match key.as_rsa_public() {
        Ok(rsa_key) => rsa_key,
        Err(e) => {
            tracing::debug!(error = %e, "RSA verification refused");
            return false;
        }
    };

    UnparsedPublicKey::new(algorithm, rsa_key.as_der())
        .verify(payload.as_bytes(), signature)
        .is_ok()
}
