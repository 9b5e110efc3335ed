/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * The route sits behind the auth gate, so the user id is already verified
 * and available through the `AuthUser` extractor.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::user::UserProfile;

/// Get current user handler
///
/// # Returns
///
/// The public profile of the session's user
///
/// # Errors
///
/// * `401 Unauthorized` - If the token's user no longer exists
/// * `500 Internal Server Error` - If the lookup fails
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserProfile>, ApiError> {
    let user = get_user_by_id(&pool, auth.user_id).await?.ok_or_else(|| {
        tracing::warn!("Session refers to missing user: {}", auth.user_id);
        ApiError::Unauthenticated
    })?;

    Ok(Json(UserProfile::from(user)))
}
