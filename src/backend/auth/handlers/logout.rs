/**
 * Logout Handler
 *
 * POST /api/auth/logout. Tokens are stateless, so logging out only clears the
 * session cookie on the client. It succeeds with or without a session.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookies::SessionCookie;
use crate::backend::auth::handlers::types::MessageResponse;

/// Logout handler
///
/// Always returns `200 OK` with `{"message":"Logged out"}` and a removal cookie
/// (empty value, zero max age, path `/`).
pub async fn logout(
    State(session_cookie): State<SessionCookie>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = session_cookie.clear(jar);
    (jar, Json(MessageResponse::new("Logged out")))
}
