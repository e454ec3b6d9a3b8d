use std::sync::Arc;

use axum::extract::Extension;
use chrono::{DateTime, Utc};

use tiendaops_db::rows::{NewNotificationRow, NotificationRow, TaskRow};
use tiendaops_db::{DbError, Query, RestClient};
use tiendaops_tasks::{reminder_cutoff, reminder_message, TaskStatus};

use crate::app::dto::ReminderBatch;
use crate::app::{errors, services::AppServices};

/// `POST /functions/task-reminders`
///
/// One reminder notification per pending task per window; a task whose latest
/// notification is newer than the cutoff is skipped.
pub async fn send_pending(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match remind_pending_tasks(&services.db).await {
        Ok(batch) => errors::json_success(batch),
        Err(e) => errors::json_error("task_reminder_failed", e.to_string()),
    }
}

async fn remind_pending_tasks(db: &RestClient) -> Result<ReminderBatch, DbError> {
    let tasks: Vec<TaskRow> = db
        .select(
            "tasks",
            Query::new()
                .select("*")
                .eq("status", TaskStatus::Pending.as_str()),
        )
        .await?;

    let cutoff = reminder_cutoff(Utc::now());
    let mut batch = ReminderBatch::default();
    for task in tasks {
        match remind_one(db, &task, cutoff).await {
            Ok(true) => batch.reminders_sent += 1,
            Ok(false) => batch.skipped += 1,
            Err(e) => batch.errors.push(format!("task {}: {e}", task.id)),
        }
    }

    Ok(batch)
}

/// Returns whether a reminder was written for this task.
async fn remind_one(
    db: &RestClient,
    task: &TaskRow,
    cutoff: DateTime<Utc>,
) -> Result<bool, DbError> {
    let recent: Option<NotificationRow> = db
        .select_one(
            "notifications",
            Query::new()
                .select("*")
                .eq("task_id", task.id)
                .gte("created_at", cutoff.to_rfc3339()),
        )
        .await?;
    if recent.is_some() {
        return Ok(false);
    }

    db.insert(
        "notifications",
        &NewNotificationRow {
            task_id: task.id,
            message: reminder_message(&task.title, task.due_date),
            recipient: task
                .assigned_to
                .clone()
                .unwrap_or_else(|| "equipo".to_string()),
            read: false,
        },
    )
    .await?;
    Ok(true)
}
