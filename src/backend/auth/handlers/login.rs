/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Normalize the email and look the user up
 * 2. Verify password using bcrypt
 * 3. Issue session token and set the session cookie
 * 4. Return the public user projection
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 body
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::auth::password::verify_password;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::user::{normalize_email, UserProfile};

/// Login handler
///
/// # Arguments
///
/// * `State(app_state)` - Pool, token service and cookie settings
/// * `jar` - Incoming cookies; the session cookie is added to it
/// * `payload` - Login request containing email and password
///
/// # Returns
///
/// `200 OK` with the user's profile and a `Set-Cookie` header
///
/// # Errors
///
/// * `401 Unauthorized` - `Invalid credentials` for an unknown email or a wrong password
/// * `400 Bad Request` - `Invalid payload` if the body is not valid JSON
/// * `500 Internal Server Error` - If the lookup or token signing fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "ada@x.com",
///   "password": "secret1"
/// }
/// ```
pub async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<UserProfile>), ApiError> {
    let Json(request) = payload?;
    let email = normalize_email(&request.email);

    if email.is_empty() || request.password.is_empty() {
        return Err(ApiError::InvalidCredentials);
    }

    let user = match get_user_by_email(&app_state.db_pool, &email).await? {
        Some(user) => user,
        None => {
            tracing::warn!("Login failed: unknown email {}", email);
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(&request.password, &user.password_hash).await? {
        tracing::warn!("Login failed: wrong password for {}", email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = app_state.session_tokens.create_token(user.id)?;
    let jar = app_state.session_cookie.set(jar, token);

    tracing::info!("User logged in: {}", user.email);

    Ok((jar, Json(UserProfile::from(user))))
}
