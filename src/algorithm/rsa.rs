use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::utils::base64url;

// Select crypto backend based on features
#[cfg(feature = "aws-lc-rs")]
use aws_lc_rs::signature::{self, UnparsedPublicKey};
#[cfg(not(feature = "aws-lc-rs"))]
use ring::signature::{self, UnparsedPublicKey};

/// RS256 algorithm (RSA with SHA-256)
pub struct RS256;

/// RS384 algorithm (RSA with SHA-384)
pub struct RS384;

/// RS512 algorithm (RSA with SHA-512)
pub struct RS512;

impl Algorithm for RS256 {
    fn name(&self) -> &'static str {
        "RS256"
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        verify_rsa(
            AlgorithmId::RS256,
            signing_input,
            signature,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA256,
        )
    }
}

impl Algorithm for RS384 {
    fn name(&self) -> &'static str {
        "RS384"
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        verify_rsa(
            AlgorithmId::RS384,
            signing_input,
            signature,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA384,
        )
    }
}

impl Algorithm for RS512 {
    fn name(&self) -> &'static str {
        "RS512"
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        verify_rsa(
            AlgorithmId::RS512,
            signing_input,
            signature,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA512,
        )
    }
}

/// Generic RSA signature verification
fn verify_rsa(
    algorithm: AlgorithmId,
    signing_input: &str,
    signature: &str,
    key: &Key,
    verification: &'static dyn signature::VerificationAlgorithm,
) -> Result<()> {
    let rsa_key = key.as_rsa_public(algorithm)?;
    if !rsa_key.is_well_formed() {
        return Err(Error::Unverifiable(format!(
            "{algorithm} key is not a DER-encoded RSA public key"
        )));
    }

    // A segment that is not even Base64URL cannot be the right signature
    let signature_bytes =
        base64url::decode_bytes(signature).map_err(|_| Error::SignatureInvalid)?;

    UnparsedPublicKey::new(verification, rsa_key.as_der())
        .verify(signing_input.as_bytes(), &signature_bytes)
        .map_err(|_| Error::SignatureInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring::rand::SystemRandom;
    use ring::signature::{RsaKeyPair, RSA_PKCS1_SHA256, RSA_PKCS1_SHA384, RSA_PKCS1_SHA512};

    const SIGNING_INPUT: &str = "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

    // Helper to generate RSA key pair for testing
    fn generate_rsa_keypair() -> (Vec<u8>, RsaKeyPair) {
        use ::rsa::{pkcs8::EncodePrivateKey, RsaPrivateKey};

        let mut rng = rand::thread_rng();
        let rsa_private_key = RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key");

        let pkcs8_doc = rsa_private_key
            .to_pkcs8_der()
            .expect("Failed to serialize to PKCS#8");

        let ring_keypair =
            RsaKeyPair::from_pkcs8(pkcs8_doc.as_bytes()).expect("Failed to create ring RsaKeyPair");
        let public_key_der = ring_keypair.public().as_ref().to_vec();

        (public_key_der, ring_keypair)
    }

    fn sign_rsa(
        data: &[u8],
        keypair: &RsaKeyPair,
        algorithm: &'static dyn ring::signature::RsaEncoding,
    ) -> String {
        let rng = SystemRandom::new();
        let mut signature = vec![0u8; keypair.public().modulus_len()];
        keypair
            .sign(algorithm, &rng, data, &mut signature)
            .expect("Signing failed");
        base64url::encode_bytes(&signature)
    }

    #[test]
    fn test_rs256_valid_and_tampered() {
        let (public_key_der, keypair) = generate_rsa_keypair();
        let key = Key::rsa_public(public_key_der);

        let signature = sign_rsa(SIGNING_INPUT.as_bytes(), &keypair, &RSA_PKCS1_SHA256);
        assert!(RS256.verify(SIGNING_INPUT, &signature, &key).is_ok());

        let tampered = format!("{SIGNING_INPUT}x");
        assert_eq!(
            RS256.verify(&tampered, &signature, &key),
            Err(Error::SignatureInvalid)
        );

        // Same key, different hash
        assert_eq!(
            RS384.verify(SIGNING_INPUT, &signature, &key),
            Err(Error::SignatureInvalid)
        );
    }

    #[test]
    fn test_rs384_rs512_valid_signature() {
        let (public_key_der, keypair) = generate_rsa_keypair();
        let key = Key::rsa_public(public_key_der);

        let signature = sign_rsa(SIGNING_INPUT.as_bytes(), &keypair, &RSA_PKCS1_SHA384);
        assert!(RS384.verify(SIGNING_INPUT, &signature, &key).is_ok());

        let signature = sign_rsa(SIGNING_INPUT.as_bytes(), &keypair, &RSA_PKCS1_SHA512);
        assert!(RS512.verify(SIGNING_INPUT, &signature, &key).is_ok());
    }

    #[test]
    fn test_rs256_garbage_signature() {
        let (public_key_der, _) = generate_rsa_keypair();
        let key = Key::rsa_public(public_key_der);

        assert_eq!(
            RS256.verify(SIGNING_INPUT, &base64url::encode("wrong"), &key),
            Err(Error::SignatureInvalid)
        );
        assert_eq!(
            RS256.verify(SIGNING_INPUT, "!!!", &key),
            Err(Error::SignatureInvalid)
        );
    }

    #[test]
    fn test_malformed_key_is_unverifiable() {
        let key = Key::rsa_public(b"not a key".to_vec());
        let result = RS256.verify(SIGNING_INPUT, "c2ln", &key);
        assert!(matches!(result, Err(Error::Unverifiable(_))));
    }

    #[test]
    fn test_wrong_key_type() {
        let sym_key = Key::symmetric(b"secret".to_vec());
        let result = RS256.verify(SIGNING_INPUT, "signature", &sym_key);
        assert!(matches!(result, Err(Error::Unverifiable(_))));
    }
}
