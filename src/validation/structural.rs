use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::options::ParseOptions;
use crate::token::Header;

/// Check the required header fields and claims enabled in `options`
///
/// Fields are checked in a fixed order and the first empty one is reported:
/// `cty`, `kid`, `crit`, `iss`, `sub`, `aud`, `jti`, `data`.
pub fn check(header: &Header, claims: &Claims, options: &ParseOptions) -> Result<()> {
    if options.required_header_content_type && header.content_type.is_empty() {
        return Err(Error::HeadersContentType);
    }
    if options.required_header_key_id && header.key_id.is_empty() {
        return Err(Error::HeadersKeyId);
    }
    if options.required_header_critical && header.critical.as_ref().map_or(true, |c| c.is_empty())
    {
        return Err(Error::HeadersCritical);
    }

    if options.required_claim_issuer && claims.issuer.is_empty() {
        return Err(Error::ClaimsIssuer);
    }
    if options.required_claim_subject && claims.subject.is_empty() {
        return Err(Error::ClaimsSubject);
    }
    if options.required_claim_audience && claims.audience.is_empty() {
        return Err(Error::ClaimsAudience);
    }
    if options.required_claim_jwt_id && claims.jwt_id.is_empty() {
        return Err(Error::ClaimsJwtId);
    }
    if options.required_claim_data && claims.data.as_ref().map_or(true, |d| d.is_null()) {
        return Err(Error::ClaimsData);
    }

    Ok(())
}
