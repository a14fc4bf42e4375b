use crate::error::Result;
use crate::keys::Key;

/// Signing strategy for one algorithm
///
/// A token is only checked by a signer whose [`algorithm_header_value`] equals
/// the token's `alg` header; see [`Token::verify`](crate::Token::verify).
///
/// [`algorithm_header_value`]: Signer::algorithm_header_value
pub trait Signer {
    /// The `alg` header value this signer produces and accepts (e.g. "HS256")
    fn algorithm_header_value(&self) -> &str;

    /// Compute the raw signature over the signing payload (header.claims)
    fn sign(&self, payload: &str, key: &Key) -> Result<Vec<u8>>;

    /// Check a raw signature against the signing payload
    ///
    /// Never fails: a wrong key type or a bad signature both answer `false`.
    fn verify(&self, signature: &[u8], payload: &str, key: &Key) -> bool;
}

/// Type alias for boxed signer trait objects
pub type BoxedSigner = Box<dyn Signer + Send + Sync>;
