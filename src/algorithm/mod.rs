mod traits;

pub mod hmac;
pub mod none;

#[cfg(feature = "rsa")]
pub mod rsa;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;

pub use traits::{BoxedSigner, Signer};

use crate::error::{Error, Result};
use crate::limits::MAX_ALG_LENGTH;
use crate::utils::bounds::validate_field_size;

/// Algorithm identifier from the `alg` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// Unsigned token
    None,

    /// HMAC with SHA-256
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,

    /// RSA with SHA-256
    #[cfg(feature = "rsa")]
    RS256,

    /// RSA with SHA-384
    #[cfg(feature = "rsa")]
    RS384,

    /// RSA with SHA-512
    #[cfg(feature = "rsa")]
    RS512,

    /// ECDSA with P-256 and SHA-256
    #[cfg(feature = "ecdsa")]
    ES256,

    /// ECDSA with P-384 and SHA-384
    #[cfg(feature = "ecdsa")]
    ES384,
}

impl AlgorithmId {
    /// Convert to the `alg` header value
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::None => "none",
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::HS384 => "HS384",
            AlgorithmId::HS512 => "HS512",

            #[cfg(feature = "rsa")]
            AlgorithmId::RS256 => "RS256",
            #[cfg(feature = "rsa")]
            AlgorithmId::RS384 => "RS384",
            #[cfg(feature = "rsa")]
            AlgorithmId::RS512 => "RS512",

            #[cfg(feature = "ecdsa")]
            AlgorithmId::ES256 => "ES256",
            #[cfg(feature = "ecdsa")]
            AlgorithmId::ES384 => "ES384",
        }
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub fn is_symmetric(&self) -> bool {
        matches!(
            self,
            AlgorithmId::HS256 | AlgorithmId::HS384 | AlgorithmId::HS512
        )
    }

    /// The signer implementing this algorithm
    pub fn signer(&self) -> BoxedSigner {
        match self {
            AlgorithmId::None => Box::new(none::NoneSigner),
            AlgorithmId::HS256 => Box::new(hmac::HS256),
            AlgorithmId::HS384 => Box::new(hmac::HS384),
            AlgorithmId::HS512 => Box::new(hmac::HS512),

            #[cfg(feature = "rsa")]
            AlgorithmId::RS256 => Box::new(rsa::RS256),
            #[cfg(feature = "rsa")]
            AlgorithmId::RS384 => Box::new(rsa::RS384),
            #[cfg(feature = "rsa")]
            AlgorithmId::RS512 => Box::new(rsa::RS512),

            #[cfg(feature = "ecdsa")]
            AlgorithmId::ES256 => Box::new(ecdsa::ES256),
            #[cfg(feature = "ecdsa")]
            AlgorithmId::ES384 => Box::new(ecdsa::ES384),
        }
    }
}

impl std::str::FromStr for AlgorithmId {
    type Err = Error;

    /// Parse an `alg` header value; matching is case-sensitive
    fn from_str(s: &str) -> Result<Self> {
        validate_field_size("alg", s, MAX_ALG_LENGTH)?;

        match s {
            "none" => Ok(AlgorithmId::None),

            "HS256" => Ok(AlgorithmId::HS256),
            "HS384" => Ok(AlgorithmId::HS384),
            "HS512" => Ok(AlgorithmId::HS512),

            #[cfg(feature = "rsa")]
            "RS256" => Ok(AlgorithmId::RS256),
            #[cfg(feature = "rsa")]
            "RS384" => Ok(AlgorithmId::RS384),
            #[cfg(feature = "rsa")]
            "RS512" => Ok(AlgorithmId::RS512),

            #[cfg(feature = "ecdsa")]
            "ES256" => Ok(AlgorithmId::ES256),
            #[cfg(feature = "ecdsa")]
            "ES384" => Ok(AlgorithmId::ES384),

            _ => Err(Error::AlgorithmUnsupported(s.to_string())),
        }
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
