//! Token parser
//!
//! Runs the full pipeline for one token:
//!
//! ```text
//! split → decode header → decode claims → verify signature
//!       → required fields → exp / nbf / iat
//! ```
//!
//! Signature verification and the time checks can be switched off through
//! [`ParseOptions`]; the required-field checks always run.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;
use crate::keys::Key;
use crate::options::ParseOptions;
use crate::signature;
use crate::token::{RawToken, Token};
use crate::validation::{structural, temporal};

/// Parses, verifies and validates tokens with one key
///
/// The parser is immutable and can be shared between threads. Options given
/// to [`TokenParser::with_options`] apply to [`TokenParser::parse`];
/// [`TokenParser::parse_with`] overrides them for a single call.
///
/// # Example
///
/// ```ignore
/// use jwtparse::{Key, ParseOptions, TokenParser};
///
/// let parser = TokenParser::new(Key::symmetric(b"secret"))
///     .with_options(ParseOptions::new().require_subject());
///
/// let token = parser.parse(token_str)?;
/// println!("Subject: {:?}", token.subject());
/// ```
#[derive(Debug, Clone)]
pub struct TokenParser {
    key: Key,
    options: ParseOptions,
}

impl TokenParser {
    /// Parser with [`ParseOptions::DEFAULT`]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            options: ParseOptions::DEFAULT,
        }
    }

    /// Replace the options used by [`TokenParser::parse`]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Options used by [`TokenParser::parse`]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Key used for signature verification
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Parse a token with the parser's options
    pub fn parse(&self, token: &str) -> Result<Token> {
        self.parse_with(token, &self.options)
    }

    /// Parse a token with per-call options
    pub fn parse_with(&self, token: &str, options: &ParseOptions) -> Result<Token> {
        self.parse_at(token, options, current_timestamp())
    }

    /// Parse a token as if the current time were `now` (seconds since Unix epoch)
    pub fn parse_at(&self, token: &str, options: &ParseOptions, now: i64) -> Result<Token> {
        match self.run(token, options, now) {
            Ok(token) => {
                tracing::trace!(alg = token.algorithm(), "token accepted");
                Ok(token)
            }
            Err(e) => {
                tracing::debug!(kind = e.kind().as_str(), error = %e, "token rejected");
                Err(e)
            }
        }
    }

    fn run(&self, token: &str, options: &ParseOptions, now: i64) -> Result<Token> {
        let raw = RawToken::split(token)?;
        let header = raw.decode_header()?;
        let claims = raw.decode_claims()?;

        if !options.skip_signature_validation {
            signature::verify(&raw, &header, &claims, &self.key, options.signing_input)?;
        }

        structural::check(&header, &claims, options)?;

        if !options.skip_claims_validation {
            temporal::check(&claims, now)?;
        }

        Ok(Token::new(header, claims, raw.signature()))
    }
}

/// Current Unix timestamp, negative if the clock is before the epoch
fn current_timestamp() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{hmac, AlgorithmId};
    use crate::claims::Claims;
    use crate::error::{Error, ErrorKind};
    use crate::signature::canonical_signing_input;
    use crate::token::Header;

    const SECRET: &[u8] = b"test-secret";
    const NOW: i64 = 1_700_000_000;

    fn make_token(header: &Header, claims: &Claims) -> String {
        let input = canonical_signing_input(header, claims).unwrap();
        let signature = hmac::sign(AlgorithmId::HS256, &input, SECRET).unwrap();
        format!("{input}.{signature}")
    }

    fn parser() -> TokenParser {
        TokenParser::new(Key::symmetric(SECRET))
    }

    #[test]
    fn test_parser_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokenParser>();
    }

    #[test]
    fn test_parse_at_valid_token() {
        let claims = Claims {
            subject: "user".to_string(),
            expiration: NOW + 60,
            ..Default::default()
        };
        let token_str = make_token(&Header::new("HS256"), &claims);

        let token = parser()
            .parse_at(&token_str, &ParseOptions::DEFAULT, NOW)
            .unwrap();
        assert_eq!(token.claims(), &claims);
        assert_eq!(token.algorithm(), "HS256");
        assert_eq!(token.signature(), token_str.rsplit('.').next().unwrap());
    }

    #[test]
    fn test_signature_checked_before_required_fields() {
        let claims = Claims {
            expiration: NOW + 60,
            ..Default::default()
        };
        let mut token_str = make_token(&Header::new("HS256"), &claims);
        token_str.push('x');

        let options = ParseOptions::new().require_issuer();
        let err = parser().parse_at(&token_str, &options, NOW).unwrap_err();
        assert_eq!(err, Error::SignatureInvalid);

        // Without the signature step the missing issuer surfaces
        let err = parser()
            .parse_at(&token_str, &options.skip_signature(), NOW)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ClaimsIssuer);
    }

    #[test]
    fn test_required_fields_checked_before_time_window() {
        let claims = Claims {
            expiration: NOW - 1,
            ..Default::default()
        };
        let token_str = make_token(&Header::new("HS256"), &claims);

        let err = parser()
            .parse_at(&token_str, &ParseOptions::new().require_jwt_id(), NOW)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ClaimsJwtId);

        let err = parser()
            .parse_at(&token_str, &ParseOptions::DEFAULT, NOW)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ClaimsExpired);
    }

    #[test]
    fn test_skip_claims_accepts_expired_token() {
        let token_str = make_token(&Header::new("HS256"), &Claims::default());
        let options = ParseOptions::new().skip_claims();
        assert!(parser().parse_at(&token_str, &options, NOW).is_ok());
    }

    #[test]
    fn test_parser_options_apply_to_parse() {
        let claims = Claims {
            expiration: NOW - 1,
            ..Default::default()
        };
        let token_str = make_token(&Header::new("HS256"), &claims);

        let lenient = parser().with_options(ParseOptions::new().skip_claims());
        assert!(lenient.options().skip_claims_validation);
        assert!(lenient.parse(&token_str).is_ok());

        // Per-call options replace the parser's own
        let err = lenient
            .parse_with(&token_str, &ParseOptions::DEFAULT)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ClaimsExpired);
    }

    #[test]
    fn test_current_timestamp_is_after_2020() {
        assert!(current_timestamp() > 1_577_836_800);
    }
}
