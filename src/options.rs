//! Parse options
//!
//! Every switch is independent and off by default. Services usually build the
//! value once with the builder methods, or load it from their own config file:
//!
//! ```ignore
//! let options: ParseOptions = serde_json::from_str(r#"{"required_claim_issuer": true}"#)?;
//! let parser = TokenParser::new(key).with_options(options);
//! ```

use serde::{Deserialize, Serialize};

/// How the signing input is obtained before signature verification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigningInput {
    /// Re-encode the decoded header and claims
    ///
    /// Only the fields this crate models are authenticated. Extra fields in the
    /// received segments are dropped before the signature is recomputed.
    ///
    /// Object keys inside `data` are emitted in sorted order. That order comes
    /// from `serde_json`'s default map; if any crate in the build enables its
    /// `preserve_order` feature, keys keep their received order instead and
    /// tokens signed over sorted keys stop verifying.
    #[default]
    Canonical,

    /// Use the first two segments exactly as received
    Verbatim,
}

/// Configuration for a single parse call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Do not verify the signature
    pub skip_signature_validation: bool,

    /// Do not check `exp`, `nbf` and `iat`
    pub skip_claims_validation: bool,

    /// Require a non-empty `cty` header
    pub required_header_content_type: bool,

    /// Require a non-empty `kid` header
    pub required_header_key_id: bool,

    /// Require a non-empty `crit` header
    pub required_header_critical: bool,

    /// Require a non-empty `iss` claim
    pub required_claim_issuer: bool,

    /// Require a non-empty `sub` claim
    pub required_claim_subject: bool,

    /// Require a non-empty `aud` claim
    pub required_claim_audience: bool,

    /// Require a non-empty `jti` claim
    pub required_claim_jwt_id: bool,

    /// Require a non-null `data` claim
    pub required_claim_data: bool,

    /// Signing input reconstruction mode
    pub signing_input: SigningInput,
}

impl ParseOptions {
    /// All switches off, canonical signing input
    pub const DEFAULT: ParseOptions = ParseOptions {
        skip_signature_validation: false,
        skip_claims_validation: false,
        required_header_content_type: false,
        required_header_key_id: false,
        required_header_critical: false,
        required_claim_issuer: false,
        required_claim_subject: false,
        required_claim_audience: false,
        required_claim_jwt_id: false,
        required_claim_data: false,
        signing_input: SigningInput::Canonical,
    };

    /// Create options with every switch off
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Skip signature verification (use with extreme caution!)
    ///
    /// The header and claims are still decoded and checked, but nothing proves
    /// who produced them.
    pub fn skip_signature(mut self) -> Self {
        self.skip_signature_validation = true;
        self
    }

    /// Skip the expiration, not-before and issued-at checks
    pub fn skip_claims(mut self) -> Self {
        self.skip_claims_validation = true;
        self
    }

    pub fn require_content_type(mut self) -> Self {
        self.required_header_content_type = true;
        self
    }

    pub fn require_key_id(mut self) -> Self {
        self.required_header_key_id = true;
        self
    }

    pub fn require_critical(mut self) -> Self {
        self.required_header_critical = true;
        self
    }

    pub fn require_issuer(mut self) -> Self {
        self.required_claim_issuer = true;
        self
    }

    pub fn require_subject(mut self) -> Self {
        self.required_claim_subject = true;
        self
    }

    pub fn require_audience(mut self) -> Self {
        self.required_claim_audience = true;
        self
    }

    pub fn require_jwt_id(mut self) -> Self {
        self.required_claim_jwt_id = true;
        self
    }

    pub fn require_data(mut self) -> Self {
        self.required_claim_data = true;
        self
    }

    /// Select how the signing input is reconstructed
    pub fn signing_input(mut self, mode: SigningInput) -> Self {
        self.signing_input = mode;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
