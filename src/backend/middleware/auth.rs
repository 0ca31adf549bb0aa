/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in caller. The bearer token is taken
 * from the Authorization header, or from the `token` query parameter when no
 * header value is present. A header that is present but not readable text
 * is rejected as malformed rather than skipped. A valid token's subject is attached to the request
 * extensions; handlers read it back with the `AuthUser` extractor.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Query, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::{ApiError, AuthError};

const BEARER_PREFIX: &str = "bearer ";

/// Authenticated user data extracted from the token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

fn token_from_header(request: &Request) -> Result<Option<String>, AuthError> {
    let Some(raw) = request.headers().get(AUTHORIZATION) else {
        return Ok(None);
    };
    let value = raw
        .to_str()
        .map_err(|_| AuthError::Malformed)?
        .trim_start();

    let token = match value.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => {
            value[BEARER_PREFIX.len()..].trim()
        }
        // A bare scheme with nothing after it.
        _ if value.trim().eq_ignore_ascii_case(BEARER_PREFIX.trim()) => "",
        _ => value.trim(),
    };

    Ok((!token.is_empty()).then(|| token.to_string()))
}

fn token_from_query(request: &Request) -> Option<String> {
    let Query(query) = Query::<TokenQuery>::try_from_uri(request.uri()).ok()?;
    query.token.filter(|t| !t.is_empty())
}

/// Pull the raw token out of a request
///
/// The header wins when both sources carry a value. `Ok(None)` means neither
/// source had one; an unreadable header is `Malformed`.
pub fn extract_token(request: &Request) -> Result<Option<String>, AuthError> {
    Ok(token_from_header(request)?.or_else(|| token_from_query(request)))
}

/// Authentication middleware
///
/// 1. Extracts the token (header first, then `?token=`)
/// 2. Validates it with the token service
/// 3. Attaches `AuthenticatedUser` to the request extensions
///
/// Rejects with 401 and the specific `AuthError` kind otherwise.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(&request)?.ok_or_else(|| {
        tracing::warn!("Missing token on {}", request.uri().path());
        AuthError::MissingToken
    })?;

    let user_id = tokens.validate(&token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        e
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable behind `auth_middleware`; without it every request is
/// rejected as `MissingToken`.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AuthError::MissingToken
            })?;

        Ok(AuthUser(user))
    }
}
