mod traits;

pub mod hmac;

#[cfg(feature = "rsa")]
pub mod rsa;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;

pub use traits::{get_verifier, Algorithm, SignatureVerifier};

use crate::error::{Error, Result};

/// Algorithm identifier from the token header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,

    /// RSA with SHA-256
    #[cfg(feature = "rsa")]
    RS256,

    /// RSA with SHA-384
    #[cfg(feature = "rsa")]
    RS384,

    /// RSA with SHA-512
    #[cfg(feature = "rsa")]
    RS512,

    /// ECDSA with P-256 and SHA-256
    #[cfg(feature = "ecdsa")]
    ES256,

    /// ECDSA with P-384 and SHA-384
    #[cfg(feature = "ecdsa")]
    ES384,
}

impl AlgorithmId {
    /// Parse the `alg` header value
    ///
    /// Unknown, disabled and `none` algorithms make the token `Unverifiable`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "HS256" => Ok(AlgorithmId::HS256),
            "HS384" => Ok(AlgorithmId::HS384),
            "HS512" => Ok(AlgorithmId::HS512),

            #[cfg(feature = "rsa")]
            "RS256" => Ok(AlgorithmId::RS256),
            #[cfg(feature = "rsa")]
            "RS384" => Ok(AlgorithmId::RS384),
            #[cfg(feature = "rsa")]
            "RS512" => Ok(AlgorithmId::RS512),

            #[cfg(feature = "ecdsa")]
            "ES256" => Ok(AlgorithmId::ES256),
            #[cfg(feature = "ecdsa")]
            "ES384" => Ok(AlgorithmId::ES384),

            "none" => Err(Error::Unverifiable(
                "the 'none' algorithm is rejected (RFC 8725)".to_string(),
            )),
            "" => Err(Error::Unverifiable("missing 'alg' header".to_string())),
            _ => Err(Error::Unverifiable(format!(
                "algorithm '{s}' is not supported or not enabled"
            ))),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::HS384 => "HS384",
            AlgorithmId::HS512 => "HS512",

            #[cfg(feature = "rsa")]
            AlgorithmId::RS256 => "RS256",
            #[cfg(feature = "rsa")]
            AlgorithmId::RS384 => "RS384",
            #[cfg(feature = "rsa")]
            AlgorithmId::RS512 => "RS512",

            #[cfg(feature = "ecdsa")]
            AlgorithmId::ES256 => "ES256",
            #[cfg(feature = "ecdsa")]
            AlgorithmId::ES384 => "ES384",
        }
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub fn is_symmetric(&self) -> bool {
        matches!(
            self,
            AlgorithmId::HS256 | AlgorithmId::HS384 | AlgorithmId::HS512
        )
    }

    /// Check if algorithm is asymmetric (RSA/ECDSA)
    pub fn is_asymmetric(&self) -> bool {
        !self.is_symmetric()
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
