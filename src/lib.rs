//! # jwtkit - JSON Signed Token Codec and Verification Core
//!
//! > Parse, build, sign, verify and validate compact JSON signed tokens (JWT).
//!
//! **jwtkit** models a token as three parts: a header section, a claims
//! section and a signature. Parsing and building are strict about structure;
//! signature verification and claim validation are pluggable through two
//! small traits.
//!
//! ## Overview
//!
//! A token travels as `header.claims.signature`, each segment Base64URL
//! encoded without padding. The header and claims segments decode to JSON
//! objects; the signature segment decodes to raw bytes. The signing payload is
//! the encoded header, a dot, and the encoded claims, taken verbatim from the
//! wire so verification always checks the exact bytes that were signed.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtkit::*;
//!
//! let token = Parser::new().parse(token_str)?;
//!
//! if !token.verify(&algorithm::hmac::HS256, &Key::symmetric(b"secret")) {
//!     return Err("bad signature");
//! }
//!
//! let mut validator = ClaimsValidator::new()
//!     .expect_issuer("https://trusted.com")
//!     .expect_audience("my-api");
//! let errors = token.validate(&mut validator);
//! assert!(errors.is_empty());
//!
//! println!("Subject: {:?}", token.subject());
//! ```
//!
//! ## Flow
//!
//! ```text
//! &str ──Parser::parse──▶ Token ──verify(signer, key)──▶ bool
//!                           │
//!                           └──validate(validator)──▶ Vec<ValidationError>
//!
//! Builder ──build(signer, key)──▶ Token ──token()──▶ String
//! ```
//!
//! Structural problems are [`Error`]s and stop parsing. A signature either
//! verifies or it does not. Claim problems are collected, never thrown, so
//! callers see every failing claim at once.
//!
//! ## Algorithm Support
//!
//! Every algorithm implements [`Signer`]; [`AlgorithmId::signer`] maps an
//! `alg` header value to its implementation.
//!
//! - **none**: unsigned tokens, the signature is always empty
//! - **HMAC** (always enabled): HS256, HS384, HS512
//! - **RSA** (with `rsa` feature): RS256, RS384, RS512
//! - **ECDSA** (with `ecdsa` feature): ES256, ES384
//!
//! ## Features
//!
//! - **`rsa`**: RSA PKCS#1 v1.5 algorithms via `ring`
//! - **`ecdsa`**: ECDSA P-256/P-384 algorithms via `ring`
//! - **`all-algorithms`** (default): both of the above
//!
//! ## Security
//!
//! ### Algorithm Confusion Prevention
//!
//! [`Token::verify`] refuses to consult a signer whose algorithm differs from
//! the token's `alg` header. A token that declares `HS256` is never checked
//! with an RSA signer and a token that declares `none` is never checked with
//! anything but the `none` signer.
//!
//! ### Unsigned Tokens
//!
//! When a token declares `none` (or no `alg` at all) the parser discards the
//! signature segment. A forged signature cannot be smuggled in alongside an
//! unsigned header.
//!
//! ### Resource Limits
//!
//! Token length and the decoded size of every segment are bounded (see
//! [`ParserConfig`]); oversized segments are rejected before they are decoded.
//!
//! ### Timing Attack Protection
//!
//! HMAC signature verification uses constant-time comparison via the
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) JSON Web Token (JWT)
//! - [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725) JSON Web Signature Best Practices

// Core modules
pub mod error;
pub(crate) mod limits;
pub mod names;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Claims validation
pub mod claims;

// Token model, parser and builder
pub mod token;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use token::{Builder, Item, Parser, ParserConfig, Signature, Token};

pub use algorithm::{AlgorithmId, BoxedSigner, Signer};
pub use claims::{ClaimsValidator, Validator};
pub use error::{Error, Result, ValidationError};
pub use keys::Key;
pub use names::RegisteredName;

// Re-export curve type for ECDSA
#[cfg(feature = "ecdsa")]
pub use keys::EcdsaCurve;
