//! Base64URL encoding/decoding per RFC 4648
//!
//! URL-safe alphabet without padding, as required by the compact token form.
//! Size limits are enforced by callers through [`decoded_len`] before decoding.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Encode bytes to a Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode a string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Number of bytes an unpadded Base64URL string of this length decodes to
pub fn decoded_len(input: &str) -> usize {
    input.len() / 4 * 3 + (input.len() % 4).saturating_sub(1)
}

/// Decode a Base64URL string to bytes
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::FormatInvalidBase64(format!("Base64URL decode failed: {e}")))
}
