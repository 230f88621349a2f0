//! Error types for token parsing
//!
//! Every failure of the parse pipeline maps to exactly one [`ErrorKind`]. The
//! [`Error`] value carries the kind together with a human-readable cause, so
//! callers can branch on the category without inspecting message text.

use thiserror::Error;

/// Closed set of failure categories
///
/// The kind is stable across releases; use [`ErrorKind::as_str`] when the
/// category has to cross a process boundary (log fields, response bodies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Token does not consist of exactly three segments
    Malformed,
    /// Header segment is not valid base64url or not a valid header object
    HeadersMalformed,
    /// Claims segment is not valid base64url or not a valid claims object
    ClaimsMalformed,
    /// The signature could not be checked at all (bad algorithm, bad key)
    Unverifiable,
    /// The signature was checked and does not match
    SignatureInvalid,
    /// Required `cty` header is empty
    HeadersContentType,
    /// Required `kid` header is empty
    HeadersKeyId,
    /// Required `crit` header is empty
    HeadersCritical,
    /// Required `iss` claim is empty
    ClaimsIssuer,
    /// Required `sub` claim is empty
    ClaimsSubject,
    /// Required `aud` claim is empty
    ClaimsAudience,
    /// Required `jti` claim is empty
    ClaimsJwtId,
    /// Required `data` claim is null or absent
    ClaimsData,
    /// `exp` lies in the past
    ClaimsExpired,
    /// `nbf` lies in the future
    ClaimsNotValidYet,
    /// `iat` lies in the future
    ClaimsIssuedAt,
}

impl ErrorKind {
    /// Stable name of the kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Malformed => "Malformed",
            ErrorKind::HeadersMalformed => "HeadersMalformed",
            ErrorKind::ClaimsMalformed => "ClaimsMalformed",
            ErrorKind::Unverifiable => "Unverifiable",
            ErrorKind::SignatureInvalid => "SignatureInvalid",
            ErrorKind::HeadersContentType => "HeadersContentType",
            ErrorKind::HeadersKeyId => "HeadersKeyId",
            ErrorKind::HeadersCritical => "HeadersCritical",
            ErrorKind::ClaimsIssuer => "ClaimsIssuer",
            ErrorKind::ClaimsSubject => "ClaimsSubject",
            ErrorKind::ClaimsAudience => "ClaimsAudience",
            ErrorKind::ClaimsJwtId => "ClaimsJwtId",
            ErrorKind::ClaimsData => "ClaimsData",
            ErrorKind::ClaimsExpired => "ClaimsExpired",
            ErrorKind::ClaimsNotValidYet => "ClaimsNotValidYet",
            ErrorKind::ClaimsIssuedAt => "ClaimsIssuedAt",
        }
    }

    /// Whether the failure comes from the signature step
    pub fn is_signature_failure(&self) -> bool {
        matches!(self, ErrorKind::Unverifiable | ErrorKind::SignatureInvalid)
    }

    /// Whether the failure comes from the time window checks
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            ErrorKind::ClaimsExpired | ErrorKind::ClaimsNotValidYet | ErrorKind::ClaimsIssuedAt
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by the parse pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Malformed: expected 3 segments separated by '.', found {segments}")]
    Malformed { segments: usize },

    #[error("HeadersMalformed: {0}")]
    HeadersMalformed(String),

    #[error("ClaimsMalformed: {0}")]
    ClaimsMalformed(String),

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Unverifiable: {0}")]
    Unverifiable(String),

    #[error("SignatureInvalid: signature does not match the signing input")]
    SignatureInvalid,

    // ============================================================================
    // Required Field Errors
    // ============================================================================
    #[error("HeadersContentType: required header 'cty' is empty")]
    HeadersContentType,

    #[error("HeadersKeyId: required header 'kid' is empty")]
    HeadersKeyId,

    #[error("HeadersCritical: required header 'crit' is empty")]
    HeadersCritical,

    #[error("ClaimsIssuer: required claim 'iss' is empty")]
    ClaimsIssuer,

    #[error("ClaimsSubject: required claim 'sub' is empty")]
    ClaimsSubject,

    #[error("ClaimsAudience: required claim 'aud' is empty")]
    ClaimsAudience,

    #[error("ClaimsJwtId: required claim 'jti' is empty")]
    ClaimsJwtId,

    #[error("ClaimsData: required claim 'data' is null")]
    ClaimsData,

    // ============================================================================
    // Temporal Errors
    // ============================================================================
    #[error("ClaimsExpired: token expired at {expired_at} (now: {now})")]
    ClaimsExpired { expired_at: i64, now: i64 },

    #[error("ClaimsNotValidYet: token not valid until {not_before} (now: {now})")]
    ClaimsNotValidYet { not_before: i64, now: i64 },

    #[error("ClaimsIssuedAt: token issued in the future at {issued_at} (now: {now})")]
    ClaimsIssuedAt { issued_at: i64, now: i64 },
}

impl Error {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Malformed { .. } => ErrorKind::Malformed,
            Error::HeadersMalformed(_) => ErrorKind::HeadersMalformed,
            Error::ClaimsMalformed(_) => ErrorKind::ClaimsMalformed,
            Error::Unverifiable(_) => ErrorKind::Unverifiable,
            Error::SignatureInvalid => ErrorKind::SignatureInvalid,
            Error::HeadersContentType => ErrorKind::HeadersContentType,
            Error::HeadersKeyId => ErrorKind::HeadersKeyId,
            Error::HeadersCritical => ErrorKind::HeadersCritical,
            Error::ClaimsIssuer => ErrorKind::ClaimsIssuer,
            Error::ClaimsSubject => ErrorKind::ClaimsSubject,
            Error::ClaimsAudience => ErrorKind::ClaimsAudience,
            Error::ClaimsJwtId => ErrorKind::ClaimsJwtId,
            Error::ClaimsData => ErrorKind::ClaimsData,
            Error::ClaimsExpired { .. } => ErrorKind::ClaimsExpired,
            Error::ClaimsNotValidYet { .. } => ErrorKind::ClaimsNotValidYet,
            Error::ClaimsIssuedAt { .. } => ErrorKind::ClaimsIssuedAt,
        }
    }
}

/// Result type alias for jwtparse operations
pub type Result<T> = std::result::Result<T, Error>;
