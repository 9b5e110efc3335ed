/**
 * Authentication Middleware
 *
 * This module provides the auth gate for routes that require a session. It
 * reads the session token from the session cookie, verifies it and attaches
 * the user id to the request extensions.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from the session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the session cookie by its configured name
/// 2. Verifies the token signature and expiry
/// 3. Attaches `AuthenticatedUser` to the request extensions
///
/// Returns 401 `Unauthorized` if the cookie is missing or the token is invalid.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let jar = CookieJar::from_headers(request.headers());

    let token = app_state.session_cookie.token(&jar).ok_or_else(|| {
        tracing::debug!("Missing session cookie");
        ApiError::Unauthenticated
    })?;

    let user_id = app_state
        .session_tokens
        .user_id_from_token(token)
        .map_err(|e| {
            tracing::warn!("Rejected session token: {}", e);
            ApiError::Unauthenticated
        })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only valid on routes behind `auth_middleware`; elsewhere it rejects with 401.
#[derive(Clone, Debug)]
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
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthenticated
            })?;

        Ok(AuthUser(user))
    }
}
