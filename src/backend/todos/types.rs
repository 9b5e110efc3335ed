/**
 * Task Handler Types
 *
 * Request bodies for the task endpoints. Status fields are typed as
 * `TaskStatus`, so an unknown status fails deserialization and surfaces as
 * `400 Invalid payload` before any handler logic runs. Fields a body type
 * does not name (`userId`, `id`, ...) are ignored.
 */

use serde::{Deserialize, Serialize};

use crate::shared::task::TaskStatus;

/// Body of `POST /api/todos`
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct CreateTaskRequest {
    /// Task text (trimmed, must be non-empty)
    #[serde(default)]
    pub text: String,
    /// Starting column, `todo` when absent
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub order: Option<i64>,
    /// Client-side creation timestamp, stored verbatim as `createdAtIso`
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Body of `PUT /api/todos/{id}`
///
/// Absent and `null` fields leave the stored value untouched.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct TaskPatch {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub order: Option<i64>,
}

/// Body of `POST /api/todos/reorder`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

/// One placement in a reorder batch
///
/// `id` stays a string here: ids that are not UUIDs are skipped when the
/// batch is applied rather than failing the whole request.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ReorderItem {
    pub id: String,
    pub status: TaskStatus,
    pub order: i64,
}
