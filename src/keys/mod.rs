/// Key material for signing and verifying tokens
///
/// This module provides a type-safe abstraction over different key types:
/// - Symmetric keys (for HMAC algorithms, both directions)
/// - Asymmetric public keys (RSA/ECDSA verification)
/// - Asymmetric private keys (RSA/ECDSA signing, PKCS#8)
use crate::error::{Error, Result};

/// A key handed to a [`Signer`](crate::algorithm::Signer)
#[derive(Debug, Clone)]
pub enum Key {
    /// Symmetric key for HMAC algorithms
    Symmetric(SymmetricKey),

    /// Asymmetric public key for RSA/ECDSA verification
    Asymmetric(AsymmetricKey),

    /// Asymmetric private key for RSA/ECDSA signing
    Private(PrivateKey),
}

impl Key {
    /// Create a symmetric key from bytes
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Key::Symmetric(SymmetricKey::new(secret.into()))
    }

    /// Create an RSA public key from its `ring` encoding (DER RSAPublicKey)
    #[cfg(feature = "rsa")]
    pub fn rsa_public(der: impl Into<Vec<u8>>) -> Self {
        Key::Asymmetric(AsymmetricKey::Rsa(RsaPublicKey::new(der.into())))
    }

    /// Create an RSA private key from PKCS#8 DER
    #[cfg(feature = "rsa")]
    pub fn rsa_private(pkcs8: impl Into<Vec<u8>>) -> Self {
        Key::Private(PrivateKey::Rsa(pkcs8.into()))
    }

    /// Create an ECDSA public key from its uncompressed point encoding
    #[cfg(feature = "ecdsa")]
    pub fn ecdsa_public(der: impl Into<Vec<u8>>, curve: EcdsaCurve) -> Self {
        Key::Asymmetric(AsymmetricKey::Ecdsa(EcdsaPublicKey::new(der.into(), curve)))
    }

    /// Create an ECDSA private key from PKCS#8 DER
    #[cfg(feature = "ecdsa")]
    pub fn ecdsa_private(pkcs8: impl Into<Vec<u8>>, curve: EcdsaCurve) -> Self {
        Key::Private(PrivateKey::Ecdsa {
            pkcs8: pkcs8.into(),
            curve,
        })
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Symmetric(_) => "Symmetric",
            #[cfg(feature = "rsa")]
            Key::Asymmetric(AsymmetricKey::Rsa(_)) => "RSA",
            #[cfg(feature = "ecdsa")]
            Key::Asymmetric(AsymmetricKey::Ecdsa(_)) => "ECDSA",
            #[cfg(feature = "rsa")]
            Key::Private(PrivateKey::Rsa(_)) => "RSA private",
            #[cfg(feature = "ecdsa")]
            Key::Private(PrivateKey::Ecdsa { .. }) => "ECDSA private",
            #[cfg(not(any(feature = "rsa", feature = "ecdsa")))]
            Key::Asymmetric(_) | Key::Private(_) => unreachable!("No asymmetric key types enabled"),
        }
    }

    /// Get as symmetric key or return error
    pub fn as_symmetric(&self) -> Result<&SymmetricKey> {
        match self {
            Key::Symmetric(key) => Ok(key),
            _ => Err(self.mismatch("HMAC", "Symmetric")),
        }
    }

    /// Get as RSA public key or return error
    #[cfg(feature = "rsa")]
    pub fn as_rsa_public(&self) -> Result<&RsaPublicKey> {
        match self {
            Key::Asymmetric(AsymmetricKey::Rsa(key)) => Ok(key),
            _ => Err(self.mismatch("RSA", "RSA")),
        }
    }

    /// Get the RSA PKCS#8 private key bytes or return error
    #[cfg(feature = "rsa")]
    pub fn as_rsa_private(&self) -> Result<&[u8]> {
        match self {
            Key::Private(PrivateKey::Rsa(pkcs8)) => Ok(pkcs8.as_slice()),
            _ => Err(self.mismatch("RSA", "RSA private")),
        }
    }

    /// Get as ECDSA public key or return error
    #[cfg(feature = "ecdsa")]
    pub fn as_ecdsa_public(&self) -> Result<&EcdsaPublicKey> {
        match self {
            Key::Asymmetric(AsymmetricKey::Ecdsa(key)) => Ok(key),
            _ => Err(self.mismatch("ECDSA", "ECDSA")),
        }
    }

    /// Get the ECDSA PKCS#8 private key bytes and curve or return error
    #[cfg(feature = "ecdsa")]
    pub fn as_ecdsa_private(&self) -> Result<(&[u8], EcdsaCurve)> {
        match self {
            Key::Private(PrivateKey::Ecdsa { pkcs8, curve }) => Ok((pkcs8.as_slice(), *curve)),
            _ => Err(self.mismatch("ECDSA", "ECDSA private")),
        }
    }

    fn mismatch(&self, algorithm: &str, expected: &str) -> Error {
        Error::KeyTypeMismatch {
            algorithm: algorithm.to_string(),
            expected_key_type: expected.to_string(),
            actual_key_type: self.key_type().to_string(),
        }
    }
}

/// Symmetric key for HMAC algorithms
#[derive(Clone)]
pub struct SymmetricKey {
    secret: Vec<u8>,
}

impl SymmetricKey {
    /// Create a new symmetric key
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

// Never print secret material
impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("len", &self.secret.len())
            .finish()
    }
}

impl From<Vec<u8>> for SymmetricKey {
    fn from(secret: Vec<u8>) -> Self {
        Self::new(secret)
    }
}

impl From<&[u8]> for SymmetricKey {
    fn from(secret: &[u8]) -> Self {
        Self::new(secret.to_vec())
    }
}

impl From<&str> for SymmetricKey {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes().to_vec())
    }
}

/// Asymmetric public key for RSA/ECDSA algorithms
#[derive(Debug, Clone)]
pub enum AsymmetricKey {
    /// RSA public key
    #[cfg(feature = "rsa")]
    Rsa(RsaPublicKey),

    /// ECDSA public key
    #[cfg(feature = "ecdsa")]
    Ecdsa(EcdsaPublicKey),
}

/// Asymmetric private key in PKCS#8 form
#[derive(Clone)]
pub enum PrivateKey {
    #[cfg(feature = "rsa")]
    Rsa(Vec<u8>),

    #[cfg(feature = "ecdsa")]
    Ecdsa { pkcs8: Vec<u8>, curve: EcdsaCurve },
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "rsa")]
            PrivateKey::Rsa(_) => f.write_str("PrivateKey::Rsa(..)"),
            #[cfg(feature = "ecdsa")]
            PrivateKey::Ecdsa { curve, .. } => write!(f, "PrivateKey::Ecdsa({curve:?}, ..)"),
            #[cfg(not(any(feature = "rsa", feature = "ecdsa")))]
            _ => unreachable!("No asymmetric key types enabled"),
        }
    }
}

/// RSA public key
#[cfg(feature = "rsa")]
#[derive(Debug, Clone)]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

#[cfg(feature = "rsa")]
impl RsaPublicKey {
    pub fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

/// ECDSA curve identifier
#[cfg(feature = "ecdsa")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcdsaCurve {
    /// P-256 (secp256r1) curve
    P256,
    /// P-384 (secp384r1) curve
    P384,
}

/// ECDSA public key
#[cfg(feature = "ecdsa")]
#[derive(Debug, Clone)]
pub struct EcdsaPublicKey {
    der: Vec<u8>,
    curve: EcdsaCurve,
}

#[cfg(feature = "ecdsa")]
impl EcdsaPublicKey {
    pub fn new(der: Vec<u8>, curve: EcdsaCurve) -> Self {
        Self { der, curve }
    }

    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }
}
