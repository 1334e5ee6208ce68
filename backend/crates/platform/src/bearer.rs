//! Bearer Token Extraction
//!
//! Common handling for `Authorization: Bearer <token>` request headers.

use axum::http::{HeaderMap, header};

/// Extract a bearer token from the `Authorization` header
///
/// Returns `None` when the header is missing, not valid UTF-8, or does
/// not use the Bearer scheme. The scheme is matched case-insensitively
/// per RFC 9110; the token itself is returned verbatim (trimmed).
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
