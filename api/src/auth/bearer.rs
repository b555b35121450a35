//! Bearer token extraction
//!
//! Every route is reachable anonymously, so the token is optional and never
//! causes a rejection on its own.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use std::convert::Infallible;

/// Extract the bearer token from the Authorization header
///
/// The scheme is matched case-sensitively.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}

/// The caller's bearer token, if one was sent
#[derive(Debug, Clone, Default)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(extract_bearer_token(&parts.headers).map(str::to_string)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc123")), Some("abc123"));
    }

    #[test]
    fn token_case_is_preserved() {
        assert_eq!(extract_bearer_token(&headers("Bearer AbC")), Some("AbC"));
    }

    #[test]
    fn other_schemes_are_ignored() {
        assert_eq!(extract_bearer_token(&headers("bearer abc123")), None);
        assert_eq!(extract_bearer_token(&headers("Basic dXNlcjpwdw==")), None);
        assert_eq!(extract_bearer_token(&headers("Bearer ")), None);
    }

    #[test]
    fn missing_header() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }
}
