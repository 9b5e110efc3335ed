/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, plus the mapping from Axum's JSON extractor
 * rejections into the same taxonomy.
 *
 * # Response Format
 *
 * Every error response is a JSON object with a single `message` field:
 *
 * ```json
 * { "message": "Not found" }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let ApiError::Internal(source) = &self {
            tracing::error!("Request failed with internal error: {}", source);
        }

        (status, Json(json!({ "message": self.message() }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::InvalidPayload
    }
}
