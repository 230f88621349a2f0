use crate::claims::Claims;
use crate::error::{Error, Result};

/// Check `exp`, `nbf` and `iat` against `now` (seconds since Unix epoch)
///
/// `exp` is always checked, so a token without one is expired. `nbf` and `iat`
/// are ignored when zero.
pub fn check(claims: &Claims, now: i64) -> Result<()> {
    if now > claims.expiration {
        return Err(Error::ClaimsExpired {
            expired_at: claims.expiration,
            now,
        });
    }

    if claims.not_before != 0 && now < claims.not_before {
        return Err(Error::ClaimsNotValidYet {
            not_before: claims.not_before,
            now,
        });
    }

    if claims.issued_at != 0 && now < claims.issued_at {
        return Err(Error::ClaimsIssuedAt {
            issued_at: claims.issued_at,
            now,
        });
    }

    Ok(())
}
