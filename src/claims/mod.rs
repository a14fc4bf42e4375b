mod validator;

pub use validator::ClaimsValidator;

use crate::error::ValidationError;
use crate::names::RegisteredName;
use serde_json::Value;

/// Claim policy checks invoked by [`Token::validate`](crate::Token::validate)
///
/// The token calls each method exactly once, in the order they are declared
/// here, passing the claim value or `None` when the claim is absent. Failures
/// are accumulated by the validator and collected with [`take_errors`].
///
/// [`take_errors`]: Validator::take_errors
pub trait Validator {
    /// Check the audience (`aud`); a present value is always a JSON array
    fn validate_audience(&mut self, audience: Option<&Value>);

    /// Check the expiration time (`exp`)
    fn validate_expiration(&mut self, expiration: Option<&Value>);

    /// Check the token id (`jti`)
    fn validate_id(&mut self, id: Option<&Value>);

    /// Check the issued-at time (`iat`)
    fn validate_issued_at(&mut self, issued_at: Option<&Value>);

    /// Check the issuer (`iss`)
    fn validate_issuer(&mut self, issuer: Option<&Value>);

    /// Check the not-before time (`nbf`)
    fn validate_not_before(&mut self, not_before: Option<&Value>);

    /// The configured expected value for a claim, if the validator has one
    fn expected(&self, claim: RegisteredName) -> Option<&str>;

    /// Drain the errors accumulated so far
    fn take_errors(&mut self) -> Vec<ValidationError>;
}
