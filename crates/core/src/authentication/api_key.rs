use axum::http::{header::AUTHORIZATION, HeaderMap};
use thiserror::Error;

/// Authorization scheme clients must present, as in `Authorization: ApiKey <key>`.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,

    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

/// Extracts the API key from the Authorization header.
///
/// The header value must have the form `ApiKey <key>` with a case sensitive
/// scheme match. When the header carries multiple values only the first one
/// is read. The key is whatever sits between the first and second space of
/// the value, taken verbatim with no trimming, so `ApiKey ` resolves to an
/// empty key and `ApiKey   x` does too.
///
/// # Arguments
/// * `headers` - The HTTP headers containing the Authorization header
///
/// # Returns
/// * `Ok(String)` - The extracted API key
/// * `Err(ApiKeyError::NoAuthHeaderIncluded)` - If no Authorization header is present
/// * `Err(ApiKeyError::MalformedAuthHeader)` - If the header does not parse as `ApiKey <key>`
pub fn get_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(ApiKeyError::NoAuthHeaderIncluded)?
        .to_str()
        .map_err(|_| ApiKeyError::MalformedAuthHeader)?;

    let parts: Vec<&str> = auth_header.split(' ').collect();
    if parts.len() < 2 || parts[0] != API_KEY_SCHEME {
        return Err(ApiKeyError::MalformedAuthHeader);
    }

    Ok(parts[1].to_string())
}
