use crate::error::Result;
use crate::keys::Key;

/// Core algorithm trait that all signature algorithms implement
///
/// `verify` returns `Unverifiable` when it cannot even attempt the comparison
/// (wrong key type, malformed key) and `SignatureInvalid` when the comparison
/// ran and failed.
pub trait Algorithm {
    /// The algorithm identifier (e.g., "HS256", "RS256")
    fn name(&self) -> &'static str;

    /// Verify a signature
    ///
    /// # Arguments
    /// * `signing_input` - The data that was signed (header.claims)
    /// * `signature` - The Base64URL-encoded signature segment
    /// * `key` - The key to use for verification
    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()>;
}

/// Type alias for boxed algorithm trait objects
pub type SignatureVerifier = Box<dyn Algorithm + Send + Sync>;

/// Get a signature verifier for the given algorithm ID
pub fn get_verifier(algorithm: &super::AlgorithmId) -> SignatureVerifier {
    match algorithm {
        super::AlgorithmId::HS256 => Box::new(super::hmac::HS256),
        super::AlgorithmId::HS384 => Box::new(super::hmac::HS384),
        super::AlgorithmId::HS512 => Box::new(super::hmac::HS512),

        #[cfg(feature = "rsa")]
        super::AlgorithmId::RS256 => Box::new(super::rsa::RS256),
        #[cfg(feature = "rsa")]
        super::AlgorithmId::RS384 => Box::new(super::rsa::RS384),
        #[cfg(feature = "rsa")]
        super::AlgorithmId::RS512 => Box::new(super::rsa::RS512),

        #[cfg(feature = "ecdsa")]
        super::AlgorithmId::ES256 => Box::new(super::ecdsa::ES256),
        #[cfg(feature = "ecdsa")]
        super::AlgorithmId::ES384 => Box::new(super::ecdsa::ES384),
    }
}
