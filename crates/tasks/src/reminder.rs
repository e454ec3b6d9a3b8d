//! Reminder-window policy for the task notifier.
//!
//! A pending task gets at most one reminder notification per window; the
//! notifier checks the hosted `notifications` table for anything newer than
//! the cutoff before writing.

use chrono::{DateTime, Duration, Utc};

/// Size of the deduplication window, in hours.
pub const REMINDER_WINDOW_HOURS: i64 = 2;

/// Oldest notification timestamp that still suppresses a new reminder.
pub fn reminder_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::hours(REMINDER_WINDOW_HOURS)
}

/// Whether a notification sent at `notified_at` still covers `now`.
///
/// A notification exactly at the cutoff counts as within the window.
pub fn within_reminder_window(notified_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    notified_at >= reminder_cutoff(now)
}

/// Compose the reminder text for a pending task.
pub fn reminder_message(title: &str, due_date: Option<DateTime<Utc>>) -> String {
    match due_date {
        Some(due) => format!(
            "Recordatorio: la tarea \"{title}\" sigue pendiente (vence {})",
            due.format("%d/%m/%Y")
        ),
        None => format!("Recordatorio: la tarea \"{title}\" sigue pendiente"),
    }
}
