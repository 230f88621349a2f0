//! Public Token type for parsed and validated tokens
//!
//! A `Token` only comes out of [`TokenParser`](crate::TokenParser) after every
//! check enabled by the effective [`ParseOptions`](crate::ParseOptions) passed.

use crate::claims::Claims;
use crate::token::Header;
use serde_json::Value;

/// A fully parsed token
///
/// Holds the decoded header, the decoded claims and the signature segment as
/// received. Nothing is mutated after construction.
///
/// # Examples
///
/// ```ignore
/// use jwtparse::*;
///
/// let parser = TokenParser::new(Key::symmetric(b"secret"));
/// let token = parser.parse(token_str)?;
///
/// println!("Subject: {:?}", token.subject());
/// println!("Expiration: {}", token.expiration());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    header: Header,
    claims: Claims,
    signature: String,
}

impl Token {
    pub(crate) fn new(header: Header, claims: Claims, signature: impl Into<String>) -> Self {
        Self {
            header,
            claims,
            signature: signature.into(),
        }
    }

    /// Get the token header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Get all claims
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Get the signature segment
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Get the algorithm named in the header
    pub fn algorithm(&self) -> &str {
        self.header.algorithm_str()
    }

    /// Get the issuer (iss claim)
    pub fn issuer(&self) -> Option<&str> {
        non_empty(&self.claims.issuer)
    }

    /// Get the subject (sub claim)
    pub fn subject(&self) -> Option<&str> {
        non_empty(&self.claims.subject)
    }

    /// Get the audience (aud claim)
    pub fn audience(&self) -> Option<&str> {
        non_empty(&self.claims.audience)
    }

    /// Get the JWT ID (jti claim)
    pub fn jwt_id(&self) -> Option<&str> {
        non_empty(&self.claims.jwt_id)
    }

    /// Get the expiration time (exp claim) as Unix timestamp
    pub fn expiration(&self) -> i64 {
        self.claims.expiration
    }

    /// Get the not-before time (nbf claim), `0` when unset
    pub fn not_before(&self) -> i64 {
        self.claims.not_before
    }

    /// Get the issued-at time (iat claim), `0` when unset
    pub fn issued_at(&self) -> i64 {
        self.claims.issued_at
    }

    /// Get the caller-defined data claim
    pub fn data(&self) -> Option<&Value> {
        self.claims.data.as_ref()
    }

    /// Split into header, claims and signature
    pub fn into_parts(self) -> (Header, Claims, String) {
        (self.header, self.claims, self.signature)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}
