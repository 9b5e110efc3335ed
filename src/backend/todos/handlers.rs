/**
 * Task HTTP Handlers
 *
 * Handlers for the `/api/todos` endpoints. All of them sit behind the auth
 * gate and act only on the requester's own tasks. A path id that is not a
 * UUID, does not exist, or belongs to another user yields `404 Not found`.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::todos::db::{self, NewTask};
use crate::backend::todos::types::{CreateTaskRequest, ReorderRequest, TaskPatch};
use crate::shared::task::{normalize_text, Task};

fn parse_task_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}

/// An owner row that is gone means the session outlived its user
fn owner_missing(err: sqlx::Error) -> ApiError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => ApiError::Unauthenticated,
        _ => err.into(),
    }
}

/// GET /api/todos
///
/// Returns the requester's tasks sorted by `order`, then creation time.
pub async fn list_todos(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = db::list_tasks(&pool, auth.user_id).await?;
    Ok(Json(tasks))
}

/// POST /api/todos
///
/// # Errors
///
/// * `400 Bad Request` - `Text required` if the text is empty after trimming,
///   `Invalid payload` for malformed JSON or an unknown status
/// * `401 Unauthorized` - If the session's user no longer exists
///
/// # Example Request
///
/// ```http
/// POST /api/todos HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "text": "write paper",
///   "status": "todo",
///   "order": 0
/// }
/// ```
pub async fn create_todo(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(request) = payload?;
    let text = normalize_text(&request.text).ok_or(ApiError::MissingText)?;

    let task = db::create_task(
        &pool,
        auth.user_id,
        NewTask {
            text,
            status: request.status.unwrap_or_default(),
            completed: request.completed.unwrap_or(false),
            order: request.order.unwrap_or(0),
            created_at_iso: request.created_at,
        },
    )
    .await
    .map_err(owner_missing)?;

    tracing::info!("Task created: {} for user {}", task.id, auth.user_id);

    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/todos/{id}
///
/// Applies a partial patch and returns the updated task. A request without
/// a JSON content type is an empty patch.
///
/// # Errors
///
/// * `400 Bad Request` - `Text required` for a blank `text`,
///   `Invalid payload` for malformed JSON or an unknown status
/// * `404 Not Found` - If the task is not the requester's
pub async fn update_todo(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let task_id = parse_task_id(&id)?;
    let mut patch = match payload {
        Ok(Json(patch)) => patch,
        Err(JsonRejection::MissingJsonContentType(_)) => TaskPatch::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    if let Some(text) = patch.text.take() {
        patch.text = Some(normalize_text(&text).ok_or(ApiError::MissingText)?);
    }

    let task = db::update_task(&pool, auth.user_id, task_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::debug!("Task updated: {}", task.id);

    Ok(Json(task))
}

/// DELETE /api/todos/{id}
///
/// Returns `{"message":"Deleted"}`, or `404 Not Found` if the task is not the
/// requester's.
pub async fn delete_todo(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let task_id = parse_task_id(&id)?;

    if !db::delete_task(&pool, auth.user_id, task_id).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!("Task deleted: {} for user {}", task_id, auth.user_id);

    Ok(Json(MessageResponse::new("Deleted")))
}

/// POST /api/todos/reorder
///
/// The whole body is validated before anything is written. Items are then
/// applied one by one without a transaction; items that do not name one of
/// the requester's tasks are skipped.
///
/// # Example Request
///
/// ```http
/// POST /api/todos/reorder HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "items": [
///     { "id": "0b6f3c4e-8a55-4d8e-9a53-0e6f3f1b2c11", "status": "done", "order": 0 }
///   ]
/// }
/// ```
pub async fn reorder_todos(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
    payload: Result<Json<ReorderRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload?;

    let applied = db::reorder_tasks(&pool, auth.user_id, &request.items).await?;

    tracing::info!(
        "Reordered {} of {} tasks for user {}",
        applied,
        request.items.len(),
        auth.user_id
    );

    Ok(Json(MessageResponse::new("Reordered")))
}
