//! Token claims
//!
//! Registered claims per [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1)
//! plus an open-ended `data` claim for caller-defined payloads.

use crate::error::{Error, Result};
use crate::utils::base64url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Claim set carried by the second token segment
///
/// String claims decode to `""` and time claims to `0` when absent. A `data`
/// claim of `null` is the same as no `data` claim.
///
/// # Examples
///
/// ```ignore
/// let token = parser.parse(token_str)?;
///
/// let claims = token.claims();
/// println!("Issuer: {}", claims.issuer);
/// println!("Expires: {}", claims.expiration);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Claims {
    /// Issuer (iss)
    #[serde(rename = "iss", skip_serializing_if = "String::is_empty")]
    pub issuer: String,

    /// Subject (sub)
    #[serde(rename = "sub", skip_serializing_if = "String::is_empty")]
    pub subject: String,

    /// Audience (aud), a single string
    #[serde(rename = "aud", skip_serializing_if = "String::is_empty")]
    pub audience: String,

    /// Expiration Time (exp), seconds since Unix epoch
    #[serde(rename = "exp", skip_serializing_if = "is_zero")]
    pub expiration: i64,

    /// Not Before (nbf), `0` means unset
    #[serde(rename = "nbf", skip_serializing_if = "is_zero")]
    pub not_before: i64,

    /// Issued At (iat), `0` means unset
    #[serde(rename = "iat", skip_serializing_if = "is_zero")]
    pub issued_at: i64,

    /// JWT ID (jti)
    #[serde(rename = "jti", skip_serializing_if = "String::is_empty")]
    pub jwt_id: String,

    /// Caller-defined payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl Claims {
    /// Decode claims from their JSON bytes
    pub fn decode(json: &[u8]) -> Result<Self> {
        // Arrays would otherwise fill the fields positionally
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(json)
            .map_err(|e| Error::ClaimsMalformed(format!("claims is not a JSON object: {e}")))?;
        serde_json::from_value(serde_json::Value::Object(object))
            .map_err(|e| Error::ClaimsMalformed(format!("failed to parse claims: {e}")))
    }

    /// Encode the claims as canonical JSON
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| Error::Unverifiable(format!("failed to encode claims: {e}")))
    }

    /// Canonical Base64URL segment for these claims
    pub fn to_segment(&self) -> Result<String> {
        self.encode().map(|json| base64url::encode_bytes(&json))
    }

    /// Deserialize the `data` claim into a caller type
    ///
    /// Returns `Ok(None)` when the token carries no data.
    pub fn data_as<T>(&self) -> std::result::Result<Option<T>, serde_json::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        self.data.clone().map(serde_json::from_value).transpose()
    }
}
