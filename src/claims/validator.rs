use crate::claims::Validator;
use crate::error::ValidationError;
use crate::limits::{DEFAULT_CLOCK_SKEW_SECONDS, MAX_CLOCK_SKEW_SECONDS, MAX_TIMESTAMP, MIN_TIMESTAMP};
use crate::names::RegisteredName;
use crate::utils::bounds::timestamp_in_bounds;

use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default claim validator
///
/// Configured builder-style; every check that fails adds one
/// [`ValidationError`] and validation carries on with the next claim.
///
/// ```ignore
/// let mut validator = ClaimsValidator::new()
///     .expect_issuer("https://auth.example.com")
///     .expect_audience("my-api")
///     .require(RegisteredName::Expiration)
///     .clock_skew(30);
///
/// let errors = token.validate(&mut validator);
/// ```
#[derive(Debug, Clone)]
pub struct ClaimsValidator {
    expected_audience: Option<String>,
    expected_issuer: Option<String>,
    expected_id: Option<String>,
    required: Vec<RegisteredName>,
    clock_skew_seconds: u64,
    max_age_seconds: Option<u64>,
    fixed_now: Option<i64>,
    errors: Vec<ValidationError>,
}

impl Default for ClaimsValidator {
    fn default() -> Self {
        Self {
            expected_audience: None,
            expected_issuer: None,
            expected_id: None,
            required: Vec::new(),
            clock_skew_seconds: DEFAULT_CLOCK_SKEW_SECONDS,
            max_age_seconds: None,
            fixed_now: None,
            errors: Vec::new(),
        }
    }
}

impl ClaimsValidator {
    /// Create a validator with defaults (60s clock skew, nothing expected)
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `aud` to contain this value
    pub fn expect_audience(mut self, audience: impl Into<String>) -> Self {
        self.expected_audience = Some(audience.into());
        self
    }

    /// Require `iss` to equal this value
    pub fn expect_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.expected_issuer = Some(issuer.into());
        self
    }

    /// Require `jti` to equal this value
    pub fn expect_id(mut self, id: impl Into<String>) -> Self {
        self.expected_id = Some(id.into());
        self
    }

    /// Require a claim to be present
    pub fn require(mut self, claim: RegisteredName) -> Self {
        if !self.required.contains(&claim) {
            self.required.push(claim);
        }
        self
    }

    /// Set clock skew tolerance, capped at five minutes
    pub fn clock_skew(mut self, seconds: u64) -> Self {
        if seconds > MAX_CLOCK_SKEW_SECONDS {
            tracing::warn!(
                requested = seconds,
                max = MAX_CLOCK_SKEW_SECONDS,
                "clock skew capped"
            );
        }
        self.clock_skew_seconds = seconds.min(MAX_CLOCK_SKEW_SECONDS);
        self
    }

    /// Reject tokens whose `iat` is older than this many seconds
    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age_seconds = Some(seconds);
        self
    }

    /// Evaluate time claims against a fixed Unix timestamp instead of the system clock
    pub fn at_time(mut self, now: i64) -> Self {
        self.fixed_now = Some(now);
        self
    }

    /// Errors accumulated so far
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn now(&self) -> i64 {
        self.fixed_now.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as i64)
                .unwrap_or(MIN_TIMESTAMP)
        })
    }

    fn skew(&self) -> i64 {
        self.clock_skew_seconds as i64
    }

    /// Returns the value, or records a missing claim if one was required or expected
    fn present<'v>(&mut self, claim: RegisteredName, value: Option<&'v Value>) -> Option<&'v Value> {
        if value.is_none()
            && (self.required.contains(&claim) || self.expected(claim).is_some())
        {
            self.errors
                .push(ValidationError::MissingClaim(claim.as_str().to_string()));
        }
        value
    }

    fn invalid(&mut self, claim: RegisteredName, reason: impl Into<String>) {
        self.errors.push(ValidationError::InvalidClaim {
            claim: claim.as_str().to_string(),
            reason: reason.into(),
        });
    }

    /// Read a NumericDate; fractional seconds are truncated
    fn timestamp(&mut self, claim: RegisteredName, value: &Value) -> Option<i64> {
        let seconds = value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f.trunc() as i64));

        match seconds {
            Some(seconds) if timestamp_in_bounds(seconds) => Some(seconds),
            Some(seconds) => {
                self.invalid(
                    claim,
                    format!(
                        "timestamp {seconds} out of bounds ({MIN_TIMESTAMP} to {MAX_TIMESTAMP})"
                    ),
                );
                None
            }
            None => {
                self.invalid(claim, "expected a numeric timestamp");
                None
            }
        }
    }

    fn string<'v>(&mut self, claim: RegisteredName, value: &'v Value) -> Option<&'v str> {
        let string = value.as_str();
        if string.is_none() {
            self.invalid(claim, "expected a string");
        }
        string
    }
}

impl Validator for ClaimsValidator {
    fn validate_audience(&mut self, audience: Option<&Value>) {
        let Some(audience) = self.present(RegisteredName::Audience, audience) else {
            return;
        };

        let entries: Vec<&Value> = match audience {
            Value::Array(entries) => entries.iter().collect(),
            single => vec![single],
        };
        let mut found = Vec::with_capacity(entries.len());
        for entry in entries {
            match self.string(RegisteredName::Audience, entry) {
                Some(aud) => found.push(aud.to_string()),
                None => return,
            }
        }

        if let Some(expected) = &self.expected_audience {
            if !found.iter().any(|aud| aud == expected) {
                self.errors.push(ValidationError::AudienceMismatch {
                    expected: expected.clone(),
                    found,
                });
            }
        }
    }

    fn validate_expiration(&mut self, expiration: Option<&Value>) {
        let Some(value) = self.present(RegisteredName::Expiration, expiration) else {
            return;
        };
        let Some(exp) = self.timestamp(RegisteredName::Expiration, value) else {
            return;
        };

        let now = self.now();
        if now > exp.saturating_add(self.skew()) {
            self.errors.push(ValidationError::Expired {
                expired_at: exp,
                now,
                skew: self.clock_skew_seconds,
            });
        }
    }

    fn validate_id(&mut self, id: Option<&Value>) {
        let Some(value) = self.present(RegisteredName::Id, id) else {
            return;
        };
        let Some(id) = self.string(RegisteredName::Id, value) else {
            return;
        };

        if let Some(expected) = &self.expected_id {
            if id != expected {
                self.errors.push(ValidationError::IdMismatch {
                    expected: expected.clone(),
                    found: id.to_string(),
                });
            }
        }
    }

    fn validate_issued_at(&mut self, issued_at: Option<&Value>) {
        let Some(value) = self.present(RegisteredName::IssuedAt, issued_at) else {
            return;
        };
        let Some(iat) = self.timestamp(RegisteredName::IssuedAt, value) else {
            return;
        };

        let now = self.now();
        if iat > now.saturating_add(self.skew()) {
            self.errors.push(ValidationError::IssuedInFuture {
                issued_at: iat,
                now,
                skew: self.clock_skew_seconds,
            });
            return;
        }

        if let Some(max_age) = self.max_age_seconds {
            if now.saturating_sub(iat) > max_age as i64 {
                self.errors.push(ValidationError::TooOld {
                    issued_at: iat,
                    now,
                    max_age,
                });
            }
        }
    }

    fn validate_issuer(&mut self, issuer: Option<&Value>) {
        let Some(value) = self.present(RegisteredName::Issuer, issuer) else {
            return;
        };
        let Some(iss) = self.string(RegisteredName::Issuer, value) else {
            return;
        };

        if let Some(expected) = &self.expected_issuer {
            if iss != expected {
                self.errors.push(ValidationError::IssuerMismatch {
                    expected: expected.clone(),
                    found: iss.to_string(),
                });
            }
        }
    }

    fn validate_not_before(&mut self, not_before: Option<&Value>) {
        let Some(value) = self.present(RegisteredName::NotBefore, not_before) else {
            return;
        };
        let Some(nbf) = self.timestamp(RegisteredName::NotBefore, value) else {
            return;
        };

        let now = self.now();
        if now < nbf.saturating_sub(self.skew()) {
            self.errors.push(ValidationError::NotYetValid {
                not_before: nbf,
                now,
                skew: self.clock_skew_seconds,
            });
        }
    }

    fn expected(&self, claim: RegisteredName) -> Option<&str> {
        match claim {
            RegisteredName::Audience => self.expected_audience.as_deref(),
            RegisteredName::Issuer => self.expected_issuer.as_deref(),
            RegisteredName::Id => self.expected_id.as_deref(),
            _ => None,
        }
    }

    fn take_errors(&mut self) -> Vec<ValidationError> {
        std::mem::take(&mut self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    fn validator() -> ClaimsValidator {
        ClaimsValidator::new().at_time(NOW)
    }

    #[test]
    fn test_absent_claims_pass_by_default() {
        let mut v = validator();
        v.validate_audience(None);
        v.validate_expiration(None);
        v.validate_id(None);
        v.validate_issued_at(None);
        v.validate_issuer(None);
        v.validate_not_before(None);
        assert!(v.take_errors().is_empty());
    }

    #[test]
    fn test_expired() {
        let mut v = validator();
        v.validate_expiration(Some(&json!(NOW - 3600)));
        assert_eq!(
            v.take_errors(),
            vec![ValidationError::Expired {
                expired_at: NOW - 3600,
                now: NOW,
                skew: 60,
            }]
        );
    }

    #[test]
    fn test_expiration_within_skew() {
        let mut v = validator().clock_skew(120);
        v.validate_expiration(Some(&json!(NOW - 100)));
        assert!(v.take_errors().is_empty());
    }

    #[test]
    fn test_clock_skew_is_capped() {
        let mut v = validator().clock_skew(10_000);
        v.validate_expiration(Some(&json!(NOW - 600)));
        assert!(matches!(
            v.take_errors()[..],
            [ValidationError::Expired { skew: 300, .. }]
        ));
    }

    #[test]
    fn test_not_yet_valid() {
        let mut v = validator();
        v.validate_not_before(Some(&json!(NOW + 3600)));
        assert!(matches!(
            v.take_errors()[..],
            [ValidationError::NotYetValid { .. }]
        ));
    }

    #[test]
    fn test_issued_in_future_and_too_old() {
        let mut v = validator().max_age(600);
        v.validate_issued_at(Some(&json!(NOW + 3600)));
        v.validate_issued_at(Some(&json!(NOW - 3600)));
        v.validate_issued_at(Some(&json!(NOW - 300)));
        let errors = v.take_errors();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::IssuedInFuture { .. }));
        assert!(matches!(
            errors[1],
            ValidationError::TooOld { max_age: 600, .. }
        ));
    }

    #[test]
    fn test_fractional_timestamp_is_truncated() {
        let mut v = validator();
        v.validate_expiration(Some(&json!((NOW + 10) as f64 + 0.75)));
        assert!(v.take_errors().is_empty());
    }

    #[test]
    fn test_non_numeric_timestamp() {
        let mut v = validator();
        v.validate_expiration(Some(&json!("tomorrow")));
        v.validate_not_before(Some(&json!(-5)));
        let errors = v.take_errors();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ValidationError::InvalidClaim { .. })));
    }

    #[test]
    fn test_audience() {
        let mut v = validator().expect_audience("api");
        v.validate_audience(Some(&json!(["web", "api"])));
        assert!(v.take_errors().is_empty());

        v.validate_audience(Some(&json!(["web"])));
        assert_eq!(
            v.take_errors(),
            vec![ValidationError::AudienceMismatch {
                expected: "api".to_string(),
                found: vec!["web".to_string()],
            }]
        );

        v.validate_audience(None);
        assert_eq!(
            v.take_errors(),
            vec![ValidationError::MissingClaim("aud".to_string())]
        );
    }

    #[test]
    fn test_issuer_and_id() {
        let mut v = validator().expect_issuer("https://trusted.com").expect_id("abc");
        v.validate_issuer(Some(&json!("https://untrusted.com")));
        v.validate_id(Some(&json!("abc")));
        v.validate_id(Some(&json!(42)));
        let errors = v.take_errors();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::IssuerMismatch { .. }));
        assert!(matches!(errors[1], ValidationError::InvalidClaim { .. }));
    }

    #[test]
    fn test_required_claim() {
        let mut v = validator().require(RegisteredName::Expiration);
        v.validate_expiration(None);
        assert_eq!(
            v.errors(),
            &[ValidationError::MissingClaim("exp".to_string())]
        );
    }

    #[test]
    fn test_expected_claim_counts_as_required() {
        let mut v = validator().expect_audience("api").expect_issuer("me");
        v.validate_audience(None);
        v.validate_issuer(None);
        v.validate_id(None);
        assert_eq!(
            v.take_errors(),
            vec![
                ValidationError::MissingClaim("aud".to_string()),
                ValidationError::MissingClaim("iss".to_string()),
            ]
        );
    }

    #[test]
    fn test_expected_lookup() {
        let v = validator().expect_issuer("iss").expect_audience("aud");
        assert_eq!(v.expected(RegisteredName::Issuer), Some("iss"));
        assert_eq!(v.expected(RegisteredName::Audience), Some("aud"));
        assert_eq!(v.expected(RegisteredName::Id), None);
        assert_eq!(v.expected(RegisteredName::Expiration), None);
    }

    #[test]
    fn test_expected_through_trait_object() {
        let v = validator().expect_id("jti-1");
        let dynamic: &dyn Validator = &v;
        assert_eq!(dynamic.expected(RegisteredName::Id), Some("jti-1"));
        assert_eq!(dynamic.expected(RegisteredName::Issuer), None);
    }
}
