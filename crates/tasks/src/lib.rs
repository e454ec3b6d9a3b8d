//! `tiendaops-tasks` — task and reminder domain.
//!
//! Priority/status vocabulary shared with the hosted `tasks` table, plus the
//! reminder-window policy the notifier applies before writing a notification.

pub mod reminder;
pub mod task;

pub use reminder::{reminder_cutoff, reminder_message, within_reminder_window, REMINDER_WINDOW_HOURS};
pub use task::{Priority, TaskStatus};
