//! Bearer Credential Extraction
//!
//! Common handling for the `Authorization: Bearer <token>` header.

use axum::http::{HeaderMap, header};

/// Scheme prefix for bearer credentials
const BEARER_PREFIX: &str = "Bearer ";

/// Extract a bearer token from request headers
///
/// Returns `None` when the header is absent, not valid UTF-8, uses a
/// different scheme, or carries an empty credential. Absence is not an
/// error at this layer; routes that require identity reject it themselves.
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let token = value.strip_prefix(BEARER_PREFIX)?.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
