/**
 * API Error Types
 *
 * This module defines the error taxonomy shared by every HTTP handler.
 * Each variant maps to a fixed status code and a fixed, human-readable
 * message; the client shows the message verbatim.
 *
 * # Error Categories
 *
 * ## Validation Errors (400)
 *
 * - `MissingFields` - signup without a name, email or password
 * - `MissingText` - a task with empty text
 * - `InvalidPayload` - malformed JSON or a body of the wrong shape
 *
 * ## Authentication Errors (401)
 *
 * - `InvalidCredentials` - login failure, whether the email is unknown or the
 *   password is wrong
 * - `Unauthenticated` - missing, invalid or expired session
 *
 * ## Resource Errors
 *
 * - `NotFound` (404) - absent, or owned by another user
 * - `EmailInUse` (409) - signup with a registered email
 *
 * ## Internal Errors (500)
 *
 * Store, hashing and token failures. The source is kept for logging but the
 * client only ever sees a generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error returned from handlers and the auth gate
///
/// # Usage
///
/// ```rust
/// use plancraft::backend::error::ApiError;
/// use axum::http::StatusCode;
///
/// let err = ApiError::NotFound;
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// assert_eq!(err.message(), "Not found");
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Text required")]
    MissingText,

    #[error("Invalid payload")]
    InvalidPayload,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthenticated,

    #[error("Not found")]
    NotFound,

    #[error("Email already in use")]
    EmailInUse,

    /// Infrastructure failure
    ///
    /// The wrapped error is logged when the response is built and never
    /// serialized.
    #[error("Internal error: {0}")]
    Internal(#[source] InternalError),
}

/// Sources of an `ApiError::Internal`
#[derive(Debug, Error)]
pub enum InternalError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        ApiError::Internal(err)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(err.into())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::Internal(err.into())
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ApiError::Internal(err.into())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(err.into())
    }
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::MissingText | Self::InvalidPayload => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::EmailInUse => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message
    ///
    /// Internal errors collapse to a generic message so store or crypto
    /// details never leave the process.
    pub fn message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}
