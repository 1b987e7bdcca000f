//! Authorization header parsing for protected operations

use crate::AuthError;

/// Extract the credential from an `Authorization: <scheme> <token>` header.
///
/// Only the second whitespace-delimited part is read; the scheme word is not
/// checked and anything after the credential is ignored.
///
/// # Errors
/// - [`AuthError::MissingToken`] if the header is absent or blank
/// - [`AuthError::MalformedHeader`] if there is no second part
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or(AuthError::MissingToken)?;

    header
        .split_whitespace()
        .nth(1)
        .ok_or(AuthError::MalformedHeader)
}
