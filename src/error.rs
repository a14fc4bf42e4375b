//! Error types for token decoding, signing and claim validation
//!
//! Structural problems with a token string are reported through [`Error`] and
//! abort parsing. Signature checks never produce an error; they answer `false`.
//! Claim policy violations are collected as [`ValidationError`] values so a
//! caller can report all of them at once.

use thiserror::Error;

/// Errors raised while decoding, building or signing a token
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("Invalid token format: expected 3 dot-separated segments, found {found}")]
    FormatSegmentCount { found: usize },

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    #[error("Token {0} segment must decode to a JSON object")]
    FormatNotObject(&'static str),

    #[error("Missing required header: {0}")]
    MissingHeader(String),

    #[error("Token {segment} segment too large: {size} bytes (maximum: {max} bytes)")]
    SegmentTooLarge {
        segment: &'static str,
        size: usize,
        max: usize,
    },

    #[error("Header field '{field}' too long: {length} bytes (maximum: {max} bytes)")]
    HeaderFieldTooLong {
        field: String,
        length: usize,
        max: usize,
    },

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported or not enabled")]
    AlgorithmUnsupported(String),

    // ============================================================================
    // Key and Signing Errors
    // ============================================================================
    #[error(
        "Key type mismatch for algorithm '{algorithm}': expected {expected_key_type}, got {actual_key_type}"
    )]
    KeyTypeMismatch {
        algorithm: String,
        expected_key_type: String,
        actual_key_type: String,
    },

    #[error("Key rejected: {0}")]
    KeyRejected(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

/// A claim that does not satisfy the configured validation policy
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Token expired at {expired_at} (now: {now}, skew: {skew}s)")]
    Expired {
        expired_at: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token not valid until {not_before} (now: {now}, skew: {skew}s)")]
    NotYetValid {
        not_before: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token issued in future at {issued_at} (now: {now}, skew: {skew}s)")]
    IssuedInFuture { issued_at: i64, now: i64, skew: u64 },

    #[error("Token too old: issued at {issued_at}, max age {max_age}s (now: {now})")]
    TooOld {
        issued_at: i64,
        now: i64,
        max_age: u64,
    },

    #[error("Audience mismatch: expected '{expected}', found {found:?}")]
    AudienceMismatch {
        expected: String,
        found: Vec<String>,
    },

    #[error("Issuer mismatch: expected '{expected}', found '{found}'")]
    IssuerMismatch { expected: String, found: String },

    #[error("Token id mismatch: expected '{expected}', found '{found}'")]
    IdMismatch { expected: String, found: String },

    #[error("Required claim '{0}' is missing")]
    MissingClaim(String),

    #[error("Claim '{claim}' is invalid: {reason}")]
    InvalidClaim { claim: String, reason: String },
}

/// Result type alias for jwtkit operations
pub type Result<T> = std::result::Result<T, Error>;
