//! Database operations for tasks
//!
//! Every query is scoped by `user_id`: a task owned by someone else behaves
//! exactly like a task that does not exist.

use std::str::FromStr;

use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::backend::todos::types::{ReorderItem, TaskPatch};
use crate::shared::task::{Task, TaskStatus};

const TASK_COLUMNS: &str =
    "id, user_id, text, completed, status, sort_order, created_at_iso, created_at, updated_at";

/// Fields of a task about to be inserted
#[derive(Debug, Clone)]
pub struct NewTask {
    /// Already trimmed and non-empty
    pub text: String,
    pub status: TaskStatus,
    pub completed: bool,
    pub order: i64,
    pub created_at_iso: Option<String>,
}

fn task_from_row(row: &SqliteRow) -> Result<Task, sqlx::Error> {
    let status: String = row.try_get("status")?;
    let status = TaskStatus::from_str(&status).map_err(|e| sqlx::Error::ColumnDecode {
        index: "status".to_string(),
        source: Box::new(e),
    })?;

    Ok(Task {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        text: row.try_get("text")?,
        completed: row.try_get("completed")?,
        status,
        order: row.try_get("sort_order")?,
        created_at_iso: row.try_get("created_at_iso")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// List a user's tasks ordered by position, then creation time
pub async fn list_tasks(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Task>, sqlx::Error> {
    let rows = sqlx::query(&format!(
        "SELECT {TASK_COLUMNS} FROM todos WHERE user_id = ?1 ORDER BY sort_order ASC, created_at ASC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(task_from_row).collect()
}

/// Insert a task owned by `user_id`
pub async fn create_task(
    pool: &SqlitePool,
    user_id: Uuid,
    task: NewTask,
) -> Result<Task, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query(&format!(
        r#"
        INSERT INTO todos (id, user_id, text, completed, status, sort_order, created_at_iso, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        RETURNING {TASK_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(user_id)
    .bind(&task.text)
    .bind(task.completed)
    .bind(task.status.as_str())
    .bind(task.order)
    .bind(&task.created_at_iso)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    task_from_row(&row)
}

/// Apply a partial update to one of the user's tasks
///
/// Returns `None` if the task does not exist or belongs to another user.
/// `patch.text`, when present, must already be trimmed and non-empty.
pub async fn update_task(
    pool: &SqlitePool,
    user_id: Uuid,
    task_id: Uuid,
    patch: &TaskPatch,
) -> Result<Option<Task>, sqlx::Error> {
    let row = sqlx::query(&format!(
        r#"
        UPDATE todos
        SET text = COALESCE(?1, text),
            completed = COALESCE(?2, completed),
            status = COALESCE(?3, status),
            sort_order = COALESCE(?4, sort_order),
            updated_at = ?5
        WHERE id = ?6 AND user_id = ?7
        RETURNING {TASK_COLUMNS}
        "#
    ))
    .bind(patch.text.as_deref())
    .bind(patch.completed)
    .bind(patch.status.map(|status| status.as_str()))
    .bind(patch.order)
    .bind(Utc::now())
    .bind(task_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(task_from_row).transpose()
}

/// Delete one of the user's tasks
///
/// Returns `false` if nothing matched.
pub async fn delete_task(pool: &SqlitePool, user_id: Uuid, task_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ?1 AND user_id = ?2")
        .bind(task_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Move tasks between columns and positions
///
/// Each item is an independent conditional update; there is no surrounding
/// transaction. Items with a non-UUID id, an unknown id, or an id owned by
/// another user are skipped. Returns the number of tasks that changed.
pub async fn reorder_tasks(
    pool: &SqlitePool,
    user_id: Uuid,
    items: &[ReorderItem],
) -> Result<u64, sqlx::Error> {
    let mut applied = 0;

    for item in items {
        let Ok(task_id) = Uuid::parse_str(&item.id) else {
            tracing::debug!("Skipping reorder item with malformed id: {}", item.id);
            continue;
        };

        let result = sqlx::query(
            r#"
            UPDATE todos
            SET status = ?1, sort_order = ?2, updated_at = ?3
            WHERE id = ?4 AND user_id = ?5
            "#,
        )
        .bind(item.status.as_str())
        .bind(item.order)
        .bind(Utc::now())
        .bind(task_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        applied += result.rows_affected();
    }

    Ok(applied)
}
