/// Key material for signature verification
///
/// This module provides a type-safe abstraction over different key types:
/// - Symmetric keys (for HMAC algorithms)
/// - Asymmetric public keys (for RSA/ECDSA algorithms)
///
/// A key that does not fit the token's algorithm makes the token `Unverifiable`.
use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};

/// A key that can be used for signature verification
#[derive(Debug, Clone)]
pub enum Key {
    /// Symmetric key for HMAC algorithms
    Symmetric(SymmetricKey),

    /// Asymmetric public key for RSA/ECDSA algorithms
    Asymmetric(AsymmetricKey),
}

impl Key {
    /// Create a symmetric key from bytes
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Key::Symmetric(SymmetricKey::new(secret.into()))
    }

    /// Create an RSA public key from a DER-encoded `RSAPublicKey` (PKCS#1)
    #[cfg(feature = "rsa")]
    pub fn rsa_public(der: impl Into<Vec<u8>>) -> Self {
        Key::Asymmetric(AsymmetricKey::Rsa(RsaPublicKey::new(der.into())))
    }

    /// Create an ECDSA public key from an uncompressed SEC1 point
    #[cfg(feature = "ecdsa")]
    pub fn ecdsa_public(point: impl Into<Vec<u8>>, curve: EcdsaCurve) -> Self {
        Key::Asymmetric(AsymmetricKey::Ecdsa(EcdsaPublicKey::new(
            point.into(),
            curve,
        )))
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Symmetric(_) => "Symmetric",
            #[cfg(feature = "rsa")]
            Key::Asymmetric(AsymmetricKey::Rsa(_)) => "RSA",
            #[cfg(feature = "ecdsa")]
            Key::Asymmetric(AsymmetricKey::Ecdsa(_)) => "ECDSA",
            #[cfg(not(any(feature = "rsa", feature = "ecdsa")))]
            Key::Asymmetric(key) => match *key {},
        }
    }

    /// Get as symmetric key or return error
    pub fn as_symmetric(&self, algorithm: AlgorithmId) -> Result<&SymmetricKey> {
        match self {
            Key::Symmetric(key) => Ok(key),
            #[allow(unreachable_patterns)]
            _ => Err(self.mismatch(algorithm, "Symmetric")),
        }
    }

    /// Get as RSA public key or return error
    #[cfg(feature = "rsa")]
    pub fn as_rsa_public(&self, algorithm: AlgorithmId) -> Result<&RsaPublicKey> {
        match self {
            Key::Asymmetric(AsymmetricKey::Rsa(key)) => Ok(key),
            _ => Err(self.mismatch(algorithm, "RSA")),
        }
    }

    /// Get as ECDSA public key or return error
    #[cfg(feature = "ecdsa")]
    pub fn as_ecdsa_public(&self, algorithm: AlgorithmId) -> Result<&EcdsaPublicKey> {
        match self {
            Key::Asymmetric(AsymmetricKey::Ecdsa(key)) => Ok(key),
            _ => Err(self.mismatch(algorithm, "ECDSA")),
        }
    }

    fn mismatch(&self, algorithm: AlgorithmId, expected: &str) -> Error {
        Error::Unverifiable(format!(
            "key type mismatch for algorithm '{algorithm}': expected {expected}, got {}",
            self.key_type()
        ))
    }
}

/// Symmetric key for HMAC algorithms
#[derive(Clone)]
pub struct SymmetricKey {
    secret: Vec<u8>,
}

impl SymmetricKey {
    /// Create a new symmetric key
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

// Keep secrets out of logs
impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for SymmetricKey {
    fn from(secret: Vec<u8>) -> Self {
        Self::new(secret)
    }
}

impl From<&[u8]> for SymmetricKey {
    fn from(secret: &[u8]) -> Self {
        Self::new(secret.to_vec())
    }
}

impl From<String> for SymmetricKey {
    fn from(secret: String) -> Self {
        Self::new(secret.into_bytes())
    }
}

impl From<&str> for SymmetricKey {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes().to_vec())
    }
}

/// Asymmetric public key for RSA/ECDSA algorithms
#[derive(Debug, Clone)]
pub enum AsymmetricKey {
    /// RSA public key
    #[cfg(feature = "rsa")]
    Rsa(RsaPublicKey),

    /// ECDSA public key
    #[cfg(feature = "ecdsa")]
    Ecdsa(EcdsaPublicKey),
}

/// RSA public key (DER-encoded `RSAPublicKey`)
#[cfg(feature = "rsa")]
#[derive(Debug, Clone)]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

#[cfg(feature = "rsa")]
impl RsaPublicKey {
    /// Create a new RSA public key from DER bytes
    pub fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    /// Get the DER-encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    /// Cheap shape check: a DER `SEQUENCE` with content
    pub(crate) fn is_well_formed(&self) -> bool {
        self.der.len() > 2 && self.der[0] == 0x30
    }
}

/// ECDSA curve identifier
#[cfg(feature = "ecdsa")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcdsaCurve {
    /// P-256 (secp256r1) curve
    P256,
    /// P-384 (secp384r1) curve
    P384,
}

#[cfg(feature = "ecdsa")]
impl EcdsaCurve {
    /// Length of an uncompressed SEC1 point on this curve
    pub const fn point_len(&self) -> usize {
        match self {
            EcdsaCurve::P256 => 65,
            EcdsaCurve::P384 => 97,
        }
    }
}

/// ECDSA public key (uncompressed SEC1 point)
#[cfg(feature = "ecdsa")]
#[derive(Debug, Clone)]
pub struct EcdsaPublicKey {
    point: Vec<u8>,
    curve: EcdsaCurve,
}

#[cfg(feature = "ecdsa")]
impl EcdsaPublicKey {
    /// Create a new ECDSA public key from SEC1 point bytes
    pub fn new(point: Vec<u8>, curve: EcdsaCurve) -> Self {
        Self { point, curve }
    }

    /// Get the encoded point bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.point
    }

    /// Get the curve
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }

    /// Uncompressed form (`0x04 || X || Y`) with the curve's length
    pub(crate) fn is_well_formed(&self) -> bool {
        self.point.len() == self.curve.point_len() && self.point[0] == 0x04
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_key_conversions() {
        let key1 = SymmetricKey::from("secret");
        assert_eq!(key1.as_bytes(), b"secret");

        let key2 = SymmetricKey::from("secret".to_string());
        assert_eq!(key2.as_bytes(), b"secret");

        let key3 = SymmetricKey::from(vec![1, 2, 3]);
        assert_eq!(key3.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_symmetric_key_debug_hides_secret() {
        let key = Key::symmetric(b"super-secret".to_vec());
        let debug = format!("{key:?}");
        assert!(!debug.contains("super"));
        assert!(debug.contains("len: 12"));
    }

    #[test]
    fn test_key_type_checking() {
        let sym_key = Key::symmetric(b"secret".to_vec());
        assert!(sym_key.as_symmetric(AlgorithmId::HS256).is_ok());

        #[cfg(feature = "rsa")]
        assert!(matches!(
            sym_key.as_rsa_public(AlgorithmId::RS256),
            Err(Error::Unverifiable(_))
        ));

        #[cfg(feature = "ecdsa")]
        assert!(matches!(
            sym_key.as_ecdsa_public(AlgorithmId::ES256),
            Err(Error::Unverifiable(_))
        ));
    }

    #[test]
    fn test_key_type_names() {
        let sym_key = Key::symmetric(b"secret".to_vec());
        assert_eq!(sym_key.key_type(), "Symmetric");

        #[cfg(feature = "rsa")]
        {
            let rsa_key = Key::rsa_public(vec![1, 2, 3]);
            assert_eq!(rsa_key.key_type(), "RSA");
        }

        #[cfg(feature = "ecdsa")]
        {
            let ec_key = Key::ecdsa_public(vec![1, 2, 3], EcdsaCurve::P256);
            assert_eq!(ec_key.key_type(), "ECDSA");
        }
    }

    #[cfg(feature = "rsa")]
    #[test]
    fn test_rsa_shape_check() {
        assert!(RsaPublicKey::new(vec![0x30, 0x03, 0x02, 0x01, 0x01]).is_well_formed());
        assert!(!RsaPublicKey::new(vec![]).is_well_formed());
        assert!(!RsaPublicKey::new(b"-----BEGIN".to_vec()).is_well_formed());
    }

    #[cfg(feature = "ecdsa")]
    #[test]
    fn test_ecdsa_shape_check() {
        let mut point = vec![0u8; 65];
        point[0] = 0x04;
        assert!(EcdsaPublicKey::new(point.clone(), EcdsaCurve::P256).is_well_formed());
        assert!(!EcdsaPublicKey::new(point, EcdsaCurve::P384).is_well_formed());
        assert!(!EcdsaPublicKey::new(vec![0x02; 33], EcdsaCurve::P256).is_well_formed());
    }
}
