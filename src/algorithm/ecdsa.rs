use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::{EcdsaCurve, Key};
use crate::utils::base64url;

// Select crypto backend based on features
#[cfg(feature = "aws-lc-rs")]
use aws_lc_rs::signature::{self, UnparsedPublicKey};
#[cfg(not(feature = "aws-lc-rs"))]
use ring::signature::{self, UnparsedPublicKey};

/// ES256 algorithm (ECDSA with P-256 and SHA-256)
pub struct ES256;

/// ES384 algorithm (ECDSA with P-384 and SHA-384)
pub struct ES384;

impl Algorithm for ES256 {
    fn name(&self) -> &'static str {
        "ES256"
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        verify_ecdsa(
            AlgorithmId::ES256,
            EcdsaCurve::P256,
            signing_input,
            signature,
            key,
            &signature::ECDSA_P256_SHA256_FIXED,
        )
    }
}

impl Algorithm for ES384 {
    fn name(&self) -> &'static str {
        "ES384"
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        verify_ecdsa(
            AlgorithmId::ES384,
            EcdsaCurve::P384,
            signing_input,
            signature,
            key,
            &signature::ECDSA_P384_SHA384_FIXED,
        )
    }
}

/// Generic ECDSA signature verification
///
/// Signatures use the fixed-length `R || S` form (RFC 7518 Section 3.4).
fn verify_ecdsa(
    algorithm: AlgorithmId,
    curve: EcdsaCurve,
    signing_input: &str,
    signature: &str,
    key: &Key,
    verification: &'static dyn signature::VerificationAlgorithm,
) -> Result<()> {
    let ecdsa_key = key.as_ecdsa_public(algorithm)?;

    if ecdsa_key.curve() != curve {
        return Err(Error::Unverifiable(format!(
            "key type mismatch for algorithm '{algorithm}': expected ECDSA {curve:?}, got ECDSA {:?}",
            ecdsa_key.curve()
        )));
    }
    if !ecdsa_key.is_well_formed() {
        return Err(Error::Unverifiable(format!(
            "{algorithm} key is not an uncompressed {curve:?} point"
        )));
    }

    let signature_bytes =
        base64url::decode_bytes(signature).map_err(|_| Error::SignatureInvalid)?;

    UnparsedPublicKey::new(verification, ecdsa_key.as_bytes())
        .verify(signing_input.as_bytes(), &signature_bytes)
        .map_err(|_| Error::SignatureInvalid)
}
