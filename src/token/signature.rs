/// The third token section: raw signature bytes and their encoded text
///
/// Both parts are empty for unsigned (`none`) tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    hash: Vec<u8>,
    encoded: String,
}

impl Signature {
    pub(crate) fn new(hash: Vec<u8>, encoded: impl Into<String>) -> Self {
        Self {
            hash,
            encoded: encoded.into(),
        }
    }

    /// The signature of an unsigned token
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// Raw signature bytes
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// Base64URL text of the signature
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    pub fn is_empty(&self) -> bool {
        self.hash.is_empty() && self.encoded.is_empty()
    }
}
