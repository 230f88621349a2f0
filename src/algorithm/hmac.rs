use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

/// HS384 algorithm (HMAC with SHA-384)
pub struct HS384;

/// HS512 algorithm (HMAC with SHA-512)
pub struct HS512;

impl Algorithm for HS256 {
    fn name(&self) -> &'static str {
        "HS256"
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        verify_hmac(AlgorithmId::HS256, signing_input, signature, key)
    }
}

impl Algorithm for HS384 {
    fn name(&self) -> &'static str {
        "HS384"
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        verify_hmac(AlgorithmId::HS384, signing_input, signature, key)
    }
}

impl Algorithm for HS512 {
    fn name(&self) -> &'static str {
        "HS512"
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        verify_hmac(AlgorithmId::HS512, signing_input, signature, key)
    }
}

/// Compute the Base64URL HMAC signature of `signing_input`
///
/// Fails with `Unverifiable` for non-HMAC algorithms and empty secrets.
pub fn sign(algorithm: AlgorithmId, signing_input: &str, secret: &[u8]) -> Result<String> {
    if secret.is_empty() {
        return Err(Error::Unverifiable("HMAC secret is empty".to_string()));
    }

    match algorithm {
        AlgorithmId::HS256 => mac_b64::<Hmac<Sha256>>(signing_input, secret),
        AlgorithmId::HS384 => mac_b64::<Hmac<Sha384>>(signing_input, secret),
        AlgorithmId::HS512 => mac_b64::<Hmac<Sha512>>(signing_input, secret),
        #[allow(unreachable_patterns)]
        other => Err(Error::Unverifiable(format!(
            "{other} is not an HMAC algorithm"
        ))),
    }
}

fn mac_b64<M: Mac + KeyInit>(signing_input: &str, secret: &[u8]) -> Result<String> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|e| Error::Unverifiable(format!("invalid HMAC key: {e}")))?;
    mac.update(signing_input.as_bytes());
    Ok(base64url::encode_bytes(&mac.finalize().into_bytes()))
}

/// Recompute the signature and compare it to the received segment in constant time
fn verify_hmac(
    algorithm: AlgorithmId,
    signing_input: &str,
    signature: &str,
    key: &Key,
) -> Result<()> {
    let symmetric_key = key.as_symmetric(algorithm)?;
    let expected = sign(algorithm, signing_input, symmetric_key.as_bytes())?;

    if constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
        Ok(())
    } else {
        Err(Error::SignatureInvalid)
    }
}
