//! Registered header and claim names
//!
//! The short names recognized by this crate. Anything else found in a token is
//! carried through untouched as a custom field.

/// Header: signing algorithm identifier
pub const ALGORITHM: &str = "alg";
/// Header: token type (required when parsing)
pub const TYPE: &str = "typ";
/// Header: content type
pub const CONTENT_TYPE: &str = "cty";
/// Claim: issuer
pub const ISSUER: &str = "iss";
/// Claim: subject
pub const SUBJECT: &str = "sub";
/// Claim: audience (a single value is normalized to a list)
pub const AUDIENCE: &str = "aud";
/// Claim: expiration time
pub const EXPIRATION: &str = "exp";
/// Claim: not-valid-before time
pub const NOT_BEFORE: &str = "nbf";
/// Claim: issued-at time
pub const ISSUED_AT: &str = "iat";
/// Claim: unique token id
pub const ID: &str = "jti";

/// Which token section a registered name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Claims,
}

/// The closed set of registered names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisteredName {
    Algorithm,
    Type,
    ContentType,
    Issuer,
    Subject,
    Audience,
    Expiration,
    NotBefore,
    IssuedAt,
    Id,
}

impl RegisteredName {
    /// Every registered name, headers first
    pub const ALL: [RegisteredName; 10] = [
        RegisteredName::Algorithm,
        RegisteredName::Type,
        RegisteredName::ContentType,
        RegisteredName::Issuer,
        RegisteredName::Subject,
        RegisteredName::Audience,
        RegisteredName::Expiration,
        RegisteredName::NotBefore,
        RegisteredName::IssuedAt,
        RegisteredName::Id,
    ];

    /// Look up a short name
    pub fn from_short_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == name)
    }

    /// The short name as it appears on the wire
    pub const fn as_str(&self) -> &'static str {
        match self {
            RegisteredName::Algorithm => ALGORITHM,
            RegisteredName::Type => TYPE,
            RegisteredName::ContentType => CONTENT_TYPE,
            RegisteredName::Issuer => ISSUER,
            RegisteredName::Subject => SUBJECT,
            RegisteredName::Audience => AUDIENCE,
            RegisteredName::Expiration => EXPIRATION,
            RegisteredName::NotBefore => NOT_BEFORE,
            RegisteredName::IssuedAt => ISSUED_AT,
            RegisteredName::Id => ID,
        }
    }

    pub const fn section(&self) -> Section {
        match self {
            RegisteredName::Algorithm | RegisteredName::Type | RegisteredName::ContentType => {
                Section::Header
            }
            _ => Section::Claims,
        }
    }

    /// Whether the claim holds a numeric timestamp
    pub const fn is_timestamp(&self) -> bool {
        matches!(
            self,
            RegisteredName::Expiration | RegisteredName::NotBefore | RegisteredName::IssuedAt
        )
    }
}

impl std::fmt::Display for RegisteredName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for RegisteredName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
