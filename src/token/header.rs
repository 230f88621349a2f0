use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::utils::base64url;
use serde::{Deserialize, Serialize};

/// Token header
///
/// Absent fields decode to empty values. Fields the crate does not know are
/// ignored. Empty fields are left out when the header is encoded again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    /// Algorithm used for signing
    #[serde(rename = "alg", skip_serializing_if = "String::is_empty")]
    pub algorithm: String,

    /// Token type (typically "JWT")
    #[serde(rename = "typ", skip_serializing_if = "String::is_empty")]
    pub token_type: String,

    /// Content type of the claims
    #[serde(rename = "cty", skip_serializing_if = "String::is_empty")]
    pub content_type: String,

    /// Key ID
    #[serde(rename = "kid", skip_serializing_if = "String::is_empty")]
    pub key_id: String,

    /// Extensions the recipient must understand
    #[serde(rename = "crit", skip_serializing_if = "Option::is_none")]
    pub critical: Option<Critical>,
}

/// The `crit` header, either a single name or a list of names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Critical {
    Single(String),
    List(Vec<String>),
}

impl Critical {
    /// True for an empty string or an empty list
    pub fn is_empty(&self) -> bool {
        match self {
            Critical::Single(name) => name.is_empty(),
            Critical::List(names) => names.is_empty(),
        }
    }
}

impl Header {
    /// Header for the given algorithm with every other field empty
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            ..Self::default()
        }
    }

    /// Decode a header from its JSON bytes
    pub fn decode(json: &[u8]) -> Result<Self> {
        // Arrays would otherwise fill the fields positionally
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(json)
            .map_err(|e| Error::HeadersMalformed(format!("header is not a JSON object: {e}")))?;
        serde_json::from_value(serde_json::Value::Object(object))
            .map_err(|e| Error::HeadersMalformed(format!("failed to parse header: {e}")))
    }

    /// Encode the header as canonical JSON
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| Error::Unverifiable(format!("failed to encode header: {e}")))
    }

    /// Canonical Base64URL segment for this header
    pub fn to_segment(&self) -> Result<String> {
        self.encode().map(|json| base64url::encode_bytes(&json))
    }

    /// Parse algorithm from header
    pub fn parse_algorithm(&self) -> Result<AlgorithmId> {
        AlgorithmId::from_str(&self.algorithm)
    }

    /// Get algorithm as string
    pub fn algorithm_str(&self) -> &str {
        &self.algorithm
    }

    /// Get key ID if present
    pub fn key_id(&self) -> Option<&str> {
        Some(self.key_id.as_str()).filter(|kid| !kid.is_empty())
    }

    /// Get content type if present
    pub fn content_type(&self) -> Option<&str> {
        Some(self.content_type.as_str()).filter(|cty| !cty.is_empty())
    }
}
