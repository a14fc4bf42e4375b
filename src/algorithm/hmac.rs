use crate::algorithm::Signer;
use crate::error::{Error, Result};
use crate::keys::Key;

use constant_time_eq::constant_time_eq;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

/// HS384 algorithm (HMAC with SHA-384)
pub struct HS384;

/// HS512 algorithm (HMAC with SHA-512)
pub struct HS512;

impl Signer for HS256 {
    fn algorithm_header_value(&self) -> &str {
        "HS256"
    }

    fn sign(&self, payload: &str, key: &Key) -> Result<Vec<u8>> {
        compute_mac::<Hmac<Sha256>>(payload, key)
    }

    fn verify(&self, signature: &[u8], payload: &str, key: &Key) -> bool {
        verify_mac::<Hmac<Sha256>>(signature, payload, key)
    }
}

impl Signer for HS384 {
    fn algorithm_header_value(&self) -> &str {
        "HS384"
    }

    fn sign(&self, payload: &str, key: &Key) -> Result<Vec<u8>> {
        compute_mac::<Hmac<Sha384>>(payload, key)
    }

    fn verify(&self, signature: &[u8], payload: &str, key: &Key) -> bool {
        verify_mac::<Hmac<Sha384>>(signature, payload, key)
    }
}

impl Signer for HS512 {
    fn algorithm_header_value(&self) -> &str {
        "HS512"
    }

    fn sign(&self, payload: &str, key: &Key) -> Result<Vec<u8>> {
        compute_mac::<Hmac<Sha512>>(payload, key)
    }

    fn verify(&self, signature: &[u8], payload: &str, key: &Key) -> bool {
        verify_mac::<Hmac<Sha512>>(signature, payload, key)
    }
}

fn compute_mac<M: Mac + KeyInit>(payload: &str, key: &Key) -> Result<Vec<u8>> {
    let secret = key.as_symmetric()?;
    let mut mac = <M as KeyInit>::new_from_slice(secret.as_bytes())
        .map_err(|e| Error::KeyRejected(e.to_string()))?;
    mac.update(payload.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Recompute the MAC and compare in constant time
fn verify_mac<M: Mac + KeyInit>(signature: &[u8], payload: &str, key: &Key) -> bool {
    let expected = match compute_mac::<M>(payload, key) {
        Ok(expected) => expected,
        Err(e) => {
            tracing::debug!(error = %e, "HMAC verification refused");
            return false;
        }
    };

    if signature.len() != expected.len() {
        return false;
    }

    constant_time_eq(signature, &expected)
}
