/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Trim name and email, normalize email to lowercase
 * 2. Reject if any of name, email or password is empty
 * 3. Check if the email is already registered (case-insensitive)
 * 4. Hash password using bcrypt
 * 5. Create user in database
 * 6. Issue session token and set the session cookie
 * 7. Return 201 with the public user projection
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at the configured cost
 * - Passwords and hashes are never returned in responses
 * - The session token travels only in an HttpOnly cookie
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{create_user, get_user_by_email, CreateUserError};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::user::{normalize_email, UserProfile};

/// Sign up handler
///
/// # Arguments
///
/// * `State(app_state)` - Pool, token service, cookie settings and bcrypt cost
/// * `jar` - Incoming cookies; the session cookie is added to it
/// * `payload` - Signup request containing name, email and password
///
/// # Returns
///
/// `201 Created` with the new user's profile and a `Set-Cookie` header
///
/// # Errors
///
/// * `400 Bad Request` - `Missing fields` if any field is empty, `Invalid payload` if the body is not valid JSON
/// * `409 Conflict` - `Email already in use`
/// * `500 Internal Server Error` - If hashing, persistence or token signing fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ada",
///   "email": "ada@x.com",
///   "password": "secret1"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "name": "Ada",
///   "email": "ada@x.com",
///   "createdAt": "2025-01-01T00:00:00Z",
///   "updatedAt": "2025-01-01T00:00:00Z"
/// }
/// ```
pub async fn signup(
    State(app_state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, CookieJar, Json<UserProfile>), ApiError> {
    let Json(request) = payload?;

    let name = request.name.trim();
    let email = normalize_email(&request.email);

    if name.is_empty() || email.is_empty() || request.password.is_empty() {
        tracing::warn!("Signup rejected: missing fields");
        return Err(ApiError::MissingFields);
    }

    tracing::info!("Signup request for email: {}", email);

    if get_user_by_email(&app_state.db_pool, &email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(ApiError::EmailInUse);
    }

    let password_hash = hash_password(&request.password, app_state.bcrypt_cost).await?;

    // The pre-check can race with a concurrent signup; the unique index settles it.
    let user = create_user(&app_state.db_pool, name, &email, &password_hash)
        .await
        .map_err(|e| match e {
            CreateUserError::EmailTaken => {
                tracing::warn!("Email already exists: {}", email);
                ApiError::EmailInUse
            }
            CreateUserError::Database(err) => ApiError::from(err),
        })?;

    let token = app_state.session_tokens.create_token(user.id)?;
    let jar = app_state.session_cookie.set(jar, token);

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok((StatusCode::CREATED, jar, Json(UserProfile::from(user))))
}
