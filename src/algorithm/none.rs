use crate::algorithm::Signer;
use crate::error::Result;
use crate::keys::Key;

/// The unsigned `none` algorithm
///
/// Produces an empty signature and accepts only an empty one. Because tokens
/// are verified against a caller-chosen signer, accepting unsigned tokens is an
/// explicit opt-in: pass this signer deliberately or never.
pub struct NoneSigner;

impl Signer for NoneSigner {
    fn algorithm_header_value(&self) -> &str {
        "none"
    }

    fn sign(&self, _payload: &str, _key: &Key) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn verify(&self, signature: &[u8], _payload: &str, _key: &Key) -> bool {
        signature.is_empty()
    }
}
