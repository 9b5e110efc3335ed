/**
 * Public User Projection
 *
 * The JSON shape returned by every auth endpoint. It deliberately has no
 * password hash field; the stored record lives in `backend::auth::users`.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User information that is safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalize an email address for storage and lookup
///
/// Emails are compared case-insensitively, so they are trimmed and lowercased
/// before they ever reach the store.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
