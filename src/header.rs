//! API key extraction from the `Authorization` header.
//!
//! The only scheme understood here is `ApiKey <key>`. Anything else is
//! classified, never "repaired":
//! - header absent or empty value -> `MissingAuthHeader`
//! - wrong scheme token, or no remainder after the scheme -> `MalformedAuthHeader`
//!
//! Key validation (does this key belong to anyone?) is out of scope; callers
//! get the raw extracted string and decide.

use axum::http::{HeaderMap, header};

use crate::error::AuthHeaderError;

/// `Authorization` ヘッダのスキームトークン。大文字小文字を区別して比較する。
pub const AUTH_SCHEME: &str = "ApiKey";

/// Extract the API key from `Authorization: ApiKey <key>`.
///
/// The value is split on the first space only, so a key containing spaces
/// comes back whole. `ApiKey ` (trailing space, nothing after) yields
/// `Ok("")`: the remainder exists and is empty, which is distinct from the
/// bare `ApiKey` form that has no remainder at all.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, AuthHeaderError> {
    let value = match headers.get(header::AUTHORIZATION) {
        // 値はあるが field-value として読めない → 形式不正扱い (欠落ではない)
        Some(value) => value
            .to_str()
            .map_err(|_| AuthHeaderError::MalformedAuthHeader)?,
        None => return Err(AuthHeaderError::MissingAuthHeader),
    };

    if value.is_empty() {
        return Err(AuthHeaderError::MissingAuthHeader);
    }

    let (scheme, key) = value
        .split_once(' ')
        .ok_or(AuthHeaderError::MalformedAuthHeader)?;

    if scheme != AUTH_SCHEME {
        return Err(AuthHeaderError::MalformedAuthHeader);
    }

    Ok(key.to_string())
}
