/**
 * Task Data Structures
 *
 * This module defines the `Task` record returned by the todo API and the
 * `TaskStatus` enum that places a task in one of the three board columns.
 *
 * Field names are serialized in camelCase so the browser client can consume
 * them directly (`userId`, `createdAtIso`, `createdAt`, `updatedAt`).
 */
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Board column a task lives in
///
/// Transitions happen only through the update and reorder endpoints. The
/// server does not derive `completed` from the status; clients send both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    Progress,
    Done,
}

/// Returned when a stored or submitted status is not one of the three columns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

impl TaskStatus {
    /// All statuses in board order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::Progress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Progress => "progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "progress" => Ok(TaskStatus::Progress),
            "done" => Ok(TaskStatus::Done),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A single task on a user's board
///
/// This is the public JSON projection of a row in the `todos` table.
///
/// # Example Response
///
/// ```json
/// {
///   "id": "0b6f3c4e-8a55-4d8e-9a53-0e6f3f1b2c11",
///   "userId": "6d1f0a3e-1c3b-4a7e-b3f2-7c5d2e9a4b10",
///   "text": "write paper",
///   "completed": false,
///   "status": "todo",
///   "order": 0,
///   "createdAtIso": "2025-03-01T09:30:00.000Z",
///   "createdAt": "2025-03-01T09:30:00.412Z",
///   "updatedAt": "2025-03-01T09:30:00.412Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    /// Owner of the task; always the authenticated requester
    pub user_id: Uuid,
    pub text: String,
    pub completed: bool,
    pub status: TaskStatus,
    /// Position within the status column (ascending)
    pub order: i64,
    /// Creation timestamp as supplied by the client, stored verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_iso: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trim task text and reject it when nothing is left
///
/// Returns `None` for empty or whitespace-only input.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
