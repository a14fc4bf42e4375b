use crate::error::{Error, Result};
use crate::limits::{
    MAX_DECODED_CLAIMS_SIZE, MAX_DECODED_HEADER_SIZE, MAX_DECODED_SIGNATURE_SIZE,
    MAX_TOKEN_LENGTH,
};
use crate::names::{ALGORITHM, AUDIENCE, TYPE};
use crate::token::{Item, Signature, Token};
use crate::utils::base64url;

use serde_json::{Map, Value};

/// Size limits applied while parsing
///
/// Defaults are generous for real tokens and keep attacker-controlled input
/// from forcing large allocations.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum length of the whole token string (default: 64KB)
    pub max_token_length: usize,

    /// Maximum decoded header JSON size (default: 8KB)
    pub max_header_size: usize,

    /// Maximum decoded claims JSON size (default: 64KB)
    pub max_claims_size: usize,

    /// Maximum decoded signature size (default: 1KB)
    pub max_signature_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_token_length: MAX_TOKEN_LENGTH,
            max_header_size: MAX_DECODED_HEADER_SIZE,
            max_claims_size: MAX_DECODED_CLAIMS_SIZE,
            max_signature_size: MAX_DECODED_SIGNATURE_SIZE,
        }
    }
}

impl ParserConfig {
    /// Create a new parser config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum token string length
    pub fn max_token_length(mut self, bytes: usize) -> Self {
        self.max_token_length = bytes;
        self
    }

    /// Set maximum decoded header size
    pub fn max_header_size(mut self, bytes: usize) -> Self {
        self.max_header_size = bytes;
        self
    }

    /// Set maximum decoded claims size
    pub fn max_claims_size(mut self, bytes: usize) -> Self {
        self.max_claims_size = bytes;
        self
    }

    /// Set maximum decoded signature size
    pub fn max_signature_size(mut self, bytes: usize) -> Self {
        self.max_signature_size = bytes;
        self
    }
}

/// Decodes the compact `header.claims.signature` form into a [`Token`]
///
/// Every structural check happens here; a `Token` is only returned once all
/// of them pass.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a parser with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom limits
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a token string
    ///
    /// # Errors
    /// - [`Error::TokenTooLarge`] / [`Error::SegmentTooLarge`] when a limit is exceeded
    /// - [`Error::FormatSegmentCount`] unless there are exactly three segments
    /// - [`Error::FormatInvalidBase64`] / [`Error::FormatInvalidJson`] on undecodable segments
    /// - [`Error::FormatNotObject`] when headers or claims are not a JSON object
    /// - [`Error::MissingHeader`] when the `typ` header is absent
    pub fn parse(&self, token: &str) -> Result<Token> {
        let result = self.parse_segments(token);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "token rejected");
        }
        result
    }

    fn parse_segments(&self, token: &str) -> Result<Token> {
        if token.len() > self.config.max_token_length {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: self.config.max_token_length,
            });
        }

        let parts: Vec<&str> = token.split('.').collect();
        let [encoded_headers, encoded_claims, encoded_signature] = parts[..] else {
            return Err(Error::FormatSegmentCount { found: parts.len() });
        };

        let headers = self.decode_headers(encoded_headers)?;
        let claims = self.decode_claims(encoded_claims)?;
        let signature = self.decode_signature(&headers, encoded_signature)?;

        tracing::trace!(
            algorithm = ?headers.get(ALGORITHM),
            claims = claims.fields().len(),
            "token parsed"
        );

        Ok(Token::new(headers, claims, signature))
    }

    fn decode_headers(&self, encoded: &str) -> Result<Item> {
        let fields = decode_object(encoded, "header", self.config.max_header_size)?;

        if !fields.contains_key(TYPE) {
            return Err(Error::MissingHeader(TYPE.to_string()));
        }

        Ok(Item::new(fields, encoded))
    }

    fn decode_claims(&self, encoded: &str) -> Result<Item> {
        let mut fields = decode_object(encoded, "claims", self.config.max_claims_size)?;
        normalize_audience(&mut fields);
        Ok(Item::new(fields, encoded))
    }

    fn decode_signature(&self, headers: &Item, encoded: &str) -> Result<Signature> {
        // An absent alg counts as "none"
        let declares_none = match headers.get(ALGORITHM) {
            None => true,
            Some(Value::String(alg)) => alg == "none",
            Some(_) => false,
        };

        if declares_none {
            // Whatever the wire carries is discarded, so a forged signature
            // can never ride along on an unsigned token
            if !encoded.is_empty() {
                tracing::debug!("discarding signature segment of unsigned token");
            }
            return Ok(Signature::empty());
        }

        check_encoded_size(encoded, "signature", self.config.max_signature_size)?;
        let hash = base64url::decode_bytes(encoded)?;
        Ok(Signature::new(hash, encoded))
    }
}

/// Decode one Base64URL segment into a JSON object
fn decode_object(encoded: &str, segment: &'static str, max_size: usize) -> Result<Map<String, Value>> {
    check_encoded_size(encoded, segment, max_size)?;

    let bytes = base64url::decode_bytes(encoded)?;
    // Invalid UTF-8 surfaces here as a JSON error
    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse {segment}: {e}")))?;

    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(Error::FormatNotObject(segment)),
    }
}

/// Reject a segment whose decoded size would exceed `max_size` before decoding it
fn check_encoded_size(encoded: &str, segment: &'static str, max_size: usize) -> Result<()> {
    let decoded_len = base64url::decoded_len(encoded);
    if decoded_len > max_size {
        return Err(Error::SegmentTooLarge {
            segment,
            size: decoded_len,
            max: max_size,
        });
    }
    Ok(())
}

/// A single audience value is always stored as a one-element list
fn normalize_audience(fields: &mut Map<String, Value>) {
    if let Some(audience) = fields.get_mut(AUDIENCE) {
        if !audience.is_array() {
            let single = audience.take();
            *audience = Value::Array(vec![single]);
        }
    }
}
