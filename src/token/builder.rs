use crate::algorithm::Signer;
use crate::error::Result;
use crate::keys::Key;
use crate::names::{
    ALGORITHM, AUDIENCE, CONTENT_TYPE, EXPIRATION, ID, ISSUED_AT, ISSUER, NOT_BEFORE, SUBJECT,
    TYPE,
};
use crate::token::{Item, Signature, Token};
use crate::utils::base64url;

use serde_json::{Map, Value};

/// Assembles and signs a new [`Token`]
///
/// The `alg` header always comes from the signer passed to [`build`]; `typ`
/// defaults to `"JWT"`.
///
/// ```ignore
/// let token = Builder::new()
///     .issuer("https://auth.example.com")
///     .subject("user123")
///     .audience("my-api")
///     .expires_at(now + 3600)
///     .build(&algorithm::hmac::HS256, &Key::symmetric(b"secret"))?;
///
/// let wire = token.token();
/// ```
///
/// [`build`]: Builder::build
#[derive(Debug, Clone)]
pub struct Builder {
    headers: Map<String, Value>,
    claims: Map<String, Value>,
}

impl Default for Builder {
    fn default() -> Self {
        let mut headers = Map::new();
        headers.insert(TYPE.to_string(), Value::from("JWT"));

        Self {
            headers,
            claims: Map::new(),
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary header; `alg` is overwritten by the signer at build time
    pub fn header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn token_type(self, typ: impl Into<String>) -> Self {
        self.header(TYPE, typ.into())
    }

    pub fn content_type(self, cty: impl Into<String>) -> Self {
        self.header(CONTENT_TYPE, cty.into())
    }

    /// Set an arbitrary claim
    pub fn claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(name.into(), value.into());
        self
    }

    pub fn issuer(self, iss: impl Into<String>) -> Self {
        self.claim(ISSUER, iss.into())
    }

    pub fn subject(self, sub: impl Into<String>) -> Self {
        self.claim(SUBJECT, sub.into())
    }

    /// Add an audience; repeated calls accumulate
    pub fn audience(mut self, aud: impl Into<String>) -> Self {
        let aud = Value::from(aud.into());
        match self.claims.get_mut(AUDIENCE) {
            Some(Value::Array(entries)) => entries.push(aud),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, aud]);
            }
            None => {
                self.claims
                    .insert(AUDIENCE.to_string(), Value::Array(vec![aud]));
            }
        }
        self
    }

    pub fn expires_at(self, exp: i64) -> Self {
        self.claim(EXPIRATION, exp)
    }

    pub fn not_before(self, nbf: i64) -> Self {
        self.claim(NOT_BEFORE, nbf)
    }

    pub fn issued_at(self, iat: i64) -> Self {
        self.claim(ISSUED_AT, iat)
    }

    pub fn id(self, jti: impl Into<String>) -> Self {
        self.claim(ID, jti.into())
    }

    /// Encode headers and claims, sign the payload and assemble the token
    ///
    /// The encoded header and claims text stored in the token is exactly the
    /// text that was signed.
    pub fn build<S: Signer + ?Sized>(&self, signer: &S, key: &Key) -> Result<Token> {
        let algorithm = signer.algorithm_header_value();

        let mut headers = self.headers.clone();
        headers.insert(ALGORITHM.to_string(), Value::from(algorithm));

        let mut claims = self.claims.clone();
        // Same shape the parser produces, so decoded claims equal built ones
        if let Some(audience) = claims.get_mut(AUDIENCE) {
            if !audience.is_array() {
                let single = audience.take();
                *audience = Value::Array(vec![single]);
            }
        }

        let headers = Item::encode(headers)?;
        let claims = Item::encode(claims)?;
        let payload = format!("{}.{}", headers.encoded(), claims.encoded());

        let signature = if algorithm == "none" {
            Signature::empty()
        } else {
            let hash = signer.sign(&payload, key)?;
            let encoded = base64url::encode_bytes(&hash);
            Signature::new(hash, encoded)
        };

        tracing::trace!(algorithm, "token built");
        Ok(Token::new(headers, claims, signature))
    }
}
