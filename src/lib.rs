//! # jwtparse - Compact Signed Token Parsing
//!
//! > Decode, verify and validate compact signed tokens (JWT) in one call.
//!
//! **jwtparse** takes a bearer token of the form `header.claims.signature`, proves it was
//! signed with a trusted key, and enforces the required fields and time window configured
//! by the caller. Every failure maps to one [`ErrorKind`] so services can branch on the
//! category without parsing error messages.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtparse::*;
//!
//! let parser = TokenParser::new(Key::symmetric(b"secret"))
//!     .with_options(ParseOptions::new().require_issuer().require_subject());
//!
//! match parser.parse(token_str) {
//!     Ok(token) => println!("Subject: {:?}", token.subject()),
//!     Err(e) if e.kind() == ErrorKind::ClaimsExpired => println!("expired"),
//!     Err(e) => println!("rejected: {}", e.kind()),
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! RawToken::split            Malformed
//!     │ decode header        HeadersMalformed
//!     │ decode claims        ClaimsMalformed
//!     ▼
//! signature::verify          Unverifiable / SignatureInvalid   (unless skipped)
//!     ▼
//! validation::structural     HeadersContentType ... ClaimsData
//!     ▼
//! validation::temporal       ClaimsExpired / ClaimsNotValidYet / ClaimsIssuedAt (unless skipped)
//!     ▼
//! Token
//! ```
//!
//! The first failing step decides the error. Required-field checks run even when signature
//! verification is skipped.
//!
//! ## Signing Input
//!
//! By default the signing input is re-derived from the decoded header and claims
//! ([`SigningInput::Canonical`]): declared field order, empty fields omitted, `data` object
//! keys sorted. Key sorting holds only while `serde_json`'s `preserve_order` feature is off
//! in the whole dependency graph. Issuers that sign other JSON layouts, or builds that turn
//! `preserve_order` on, need [`SigningInput::Verbatim`], which uses the received segments as
//! they are. Use [`signature::canonical_signing_input`] to
//! produce tokens the canonical mode accepts.
//!
//! ## Algorithm Support
//!
//! - **HMAC** (always enabled): HS256, HS384, HS512
//! - **RSA** (with `rsa` feature): RS256, RS384, RS512
//! - **ECDSA** (with `ecdsa` feature): ES256, ES384
//!
//! The `"none"` algorithm is always rejected per [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725).
//! HMAC signatures are compared in constant time via [`constant_time_eq`](https://crates.io/crates/constant_time_eq).
//!
//! ## Features
//!
//! - **`rsa`**: RSA algorithms (RS256, RS384, RS512)
//! - **`ecdsa`**: ECDSA algorithms (ES256, ES384)
//! - **`all-algorithms`** (default): RSA + ECDSA
//! - **`ring`** (default): `ring` backend for RSA/ECDSA
//! - **`aws-lc-rs`**: `aws-lc-rs` backend for RSA/ECDSA; build with
//!   `--no-default-features --features all-algorithms,aws-lc-rs` to leave `ring` out
//!
//! ## Logging
//!
//! The parser emits `tracing` events: `debug` for each rejected token (with `kind` and
//! `error` fields) and `trace` for each accepted one. No subscriber is installed.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)

#[cfg(all(
    any(feature = "rsa", feature = "ecdsa"),
    not(any(feature = "ring", feature = "aws-lc-rs"))
))]
compile_error!("the `rsa` and `ecdsa` features need a crypto backend: enable `ring` or `aws-lc-rs`");

// Core modules
pub mod error;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;
pub mod signature;

// Token model
pub mod claims;
pub mod token;

// Checks and pipeline
pub mod options;
pub mod parser;
pub mod validation;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use parser::TokenParser;

pub use options::{ParseOptions, SigningInput};

pub use claims::Claims;
pub use token::{Critical, Header, RawToken, Token};

pub use algorithm::AlgorithmId;
pub use error::{Error, ErrorKind, Result};
pub use keys::Key;

// Re-export curve type for ECDSA
#[cfg(feature = "ecdsa")]
pub use keys::EcdsaCurve;
