//! The token aggregate
//!
//! A `Token` owns its header section, its claims section and its signature. It
//! is produced by [`Parser`](crate::Parser) or [`Builder`](crate::Builder) and
//! never changes afterwards.

use crate::algorithm::Signer;
use crate::claims::Validator;
use crate::error::{Error, ValidationError};
use crate::keys::Key;
use crate::names::{
    ALGORITHM, AUDIENCE, EXPIRATION, ID, ISSUED_AT, ISSUER, NOT_BEFORE, SUBJECT, TYPE,
};
use crate::token::{Item, Parser, Signature};

use serde_json::Value;

/// A decoded token: headers, claims and signature
///
/// # Examples
///
/// ```ignore
/// use jwtkit::*;
///
/// let token = Parser::new().parse(token_str)?;
///
/// // Refused outright when the signer does not match the `alg` header
/// if !token.verify(&algorithm::hmac::HS256, &Key::symmetric(b"secret")) {
///     return Err("token rejected");
/// }
///
/// let mut validator = ClaimsValidator::new().expect_issuer("https://trusted.com");
/// let errors = token.validate(&mut validator);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    headers: Item,
    claims: Item,
    signature: Signature,
}

impl Token {
    pub(crate) fn new(headers: Item, claims: Item, signature: Signature) -> Self {
        Self {
            headers,
            claims,
            signature,
        }
    }

    /// Get the header section
    pub fn headers(&self) -> &Item {
        &self.headers
    }

    /// Get the claims section
    pub fn claims(&self) -> &Item {
        &self.claims
    }

    /// Get the signature
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The signing payload: encoded headers, a dot, encoded claims
    ///
    /// Rebuilt from the stored encoded text. Re-serializing the decoded fields
    /// would not reproduce the signed bytes.
    pub fn payload(&self) -> String {
        format!("{}.{}", self.headers.encoded(), self.claims.encoded())
    }

    /// The full wire form of the token
    pub fn token(&self) -> String {
        format!("{}.{}", self.payload(), self.signature.encoded())
    }

    /// Get the declared algorithm (alg header), if it is a string
    pub fn algorithm(&self) -> Option<&str> {
        self.headers.get_str(ALGORITHM)
    }

    /// Get the token type (typ header)
    pub fn token_type(&self) -> Option<&str> {
        self.headers.get_str(TYPE)
    }

    /// Get the issuer (iss claim)
    pub fn issuer(&self) -> Option<&str> {
        self.claims.get_str(ISSUER)
    }

    /// Get the subject (sub claim)
    pub fn subject(&self) -> Option<&str> {
        self.claims.get_str(SUBJECT)
    }

    /// Get the string entries of the audience (aud claim)
    pub fn audience(&self) -> Vec<&str> {
        match self.claims.get(AUDIENCE) {
            Some(Value::Array(entries)) => entries.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(single)) => vec![single.as_str()],
            _ => Vec::new(),
        }
    }

    /// Get the expiration time (exp claim) as Unix timestamp
    pub fn expiration(&self) -> Option<i64> {
        self.claims.get(EXPIRATION).and_then(Value::as_i64)
    }

    /// Get the not-before time (nbf claim) as Unix timestamp
    pub fn not_before(&self) -> Option<i64> {
        self.claims.get(NOT_BEFORE).and_then(Value::as_i64)
    }

    /// Get the issued-at time (iat claim) as Unix timestamp
    pub fn issued_at(&self) -> Option<i64> {
        self.claims.get(ISSUED_AT).and_then(Value::as_i64)
    }

    /// Get the token id (jti claim)
    pub fn id(&self) -> Option<&str> {
        self.claims.get_str(ID)
    }

    /// Run the claim checks of `validator` and return the errors it collected
    ///
    /// Calls audience, expiration, id, issued-at, issuer and not-before, in that
    /// order, once each, whether or not the claim is present.
    pub fn validate<V: Validator + ?Sized>(&self, validator: &mut V) -> Vec<ValidationError> {
        validator.validate_audience(self.claims.get(AUDIENCE));
        validator.validate_expiration(self.claims.get(EXPIRATION));
        validator.validate_id(self.claims.get(ID));
        validator.validate_issued_at(self.claims.get(ISSUED_AT));
        validator.validate_issuer(self.claims.get(ISSUER));
        validator.validate_not_before(self.claims.get(NOT_BEFORE));

        validator.take_errors()
    }

    /// Verify the signature with `signer` and `key`
    ///
    /// Answers `false` without consulting the signer when its algorithm differs
    /// from the `alg` header (a missing or non-string `alg` never matches).
    pub fn verify<S: Signer + ?Sized>(&self, signer: &S, key: &Key) -> bool {
        let declared = self.algorithm();
        if declared != Some(signer.algorithm_header_value()) {
            tracing::debug!(
                declared = ?declared,
                signer = signer.algorithm_header_value(),
                "verification refused: algorithm mismatch"
            );
            return false;
        }

        let verified = signer.verify(self.signature.hash(), &self.payload(), key);
        tracing::trace!(algorithm = signer.algorithm_header_value(), verified, "signature checked");
        verified
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.headers.encoded(),
            self.claims.encoded(),
            self.signature.encoded()
        )
    }
}

impl std::str::FromStr for Token {
    type Err = Error;

    /// Parse with the default [`Parser`] limits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new().parse(s)
    }
}
