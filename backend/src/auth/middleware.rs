//! Authentication extractor
//!
//! Pulls a bearer token from the request and verifies it with the
//! pre-computed [`TokenService`](super::TokenService) held in `AppState`.
//!
//! Lookup order:
//! 1. `Authorization: Bearer <token>`
//! 2. `token` cookie

use super::TokenClaims;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        HeaderMap,
    },
};

/// Name of the cookie carrying the session token
pub const TOKEN_COOKIE: &str = "token";

/// Authenticated caller extracted from a verified token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: TokenClaims,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = extract_token(&parts.headers)
            .ok_or_else(|| ApiError::Unauthorized("Missing authentication token".to_string()))?;

        let claims = app_state.tokens().verify(token)?;

        Ok(AuthUser { claims })
    }
}

/// Find the raw token in the request headers
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    bearer_token(headers).or_else(|| cookie_token(headers))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn cookie_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == TOKEN_COOKIE)
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
}
