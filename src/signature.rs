//! Signature verification step
//!
//! Rebuilds the signing input for the configured [`SigningInput`] mode and
//! hands it to the verifier selected by the header's `alg`.

use crate::algorithm::get_verifier;
use crate::claims::Claims;
use crate::error::Result;
use crate::keys::Key;
use crate::options::SigningInput;
use crate::token::{Header, RawToken};

/// Canonical signing input: `base64url(header).base64url(claims)`
///
/// This is the exact string a token issuer must sign for the token to pass
/// verification in [`SigningInput::Canonical`] mode.
pub fn canonical_signing_input(header: &Header, claims: &Claims) -> Result<String> {
    Ok(format!("{}.{}", header.to_segment()?, claims.to_segment()?))
}

/// Signing input for the given mode
pub fn signing_input(
    raw: &RawToken<'_>,
    header: &Header,
    claims: &Claims,
    mode: SigningInput,
) -> Result<String> {
    match mode {
        SigningInput::Canonical => canonical_signing_input(header, claims),
        SigningInput::Verbatim => Ok(raw.verbatim_signing_input()),
    }
}

/// Verify the signature segment of `raw` with `key`
///
/// `Unverifiable` when the algorithm or key rules out any comparison,
/// `SignatureInvalid` when the comparison fails.
pub fn verify(
    raw: &RawToken<'_>,
    header: &Header,
    claims: &Claims,
    key: &Key,
    mode: SigningInput,
) -> Result<()> {
    let algorithm = header.parse_algorithm()?;
    let input = signing_input(raw, header, claims, mode)?;

    let verifier = get_verifier(&algorithm);
    verifier.verify(&input, raw.signature(), key)?;

    tracing::trace!(alg = verifier.name(), ?mode, "signature verified");
    Ok(())
}
