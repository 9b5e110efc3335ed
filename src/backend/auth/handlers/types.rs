/**
 * Authentication Handler Types
 *
 * Request bodies for the signup and login handlers. Every field defaults to an
 * empty string so that an absent field reaches the handler's own emptiness
 * check instead of failing deserialization.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    /// Display name (trimmed, must be non-empty)
    #[serde(default)]
    pub name: String,
    /// Email address (trimmed and lowercased before use)
    #[serde(default)]
    pub email: String,
    /// Plaintext password (never trimmed, must be non-empty)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Plain acknowledgement body, e.g. `{"message":"Logged out"}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
