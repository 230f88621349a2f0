use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::token::Header;
use crate::utils::base64url;

/// A token split into its three Base64URL segments
///
/// Nothing has been decoded or checked yet beyond the segment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    header: &'a str,
    claims: &'a str,
    signature: &'a str,
}

impl<'a> RawToken<'a> {
    /// Split a token string on `.`
    ///
    /// Anything other than exactly three parts is `Malformed`. Empty parts are
    /// kept and fail later when decoded.
    pub fn split(token: &'a str) -> Result<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        match *parts.as_slice() {
            [header, claims, signature] => Ok(Self {
                header,
                claims,
                signature,
            }),
            _ => Err(Error::Malformed {
                segments: parts.len(),
            }),
        }
    }

    /// Header segment as received
    pub fn header_segment(&self) -> &'a str {
        self.header
    }

    /// Claims segment as received
    pub fn claims_segment(&self) -> &'a str {
        self.claims
    }

    /// Signature segment as received
    pub fn signature(&self) -> &'a str {
        self.signature
    }

    /// Signing input exactly as received (`header.claims`)
    pub fn verbatim_signing_input(&self) -> String {
        format!("{}.{}", self.header, self.claims)
    }

    /// Decode and parse the header segment
    pub fn decode_header(&self) -> Result<Header> {
        let json = base64url::decode_bytes(self.header)
            .map_err(|e| Error::HeadersMalformed(format!("Base64URL decode failed: {e}")))?;
        Header::decode(&json)
    }

    /// Decode and parse the claims segment
    pub fn decode_claims(&self) -> Result<Claims> {
        let json = base64url::decode_bytes(self.claims)
            .map_err(|e| Error::ClaimsMalformed(format!("Base64URL decode failed: {e}")))?;
        Claims::decode(&json)
    }
}
