//! Response DTOs for the function endpoints.
//!
//! The alert evaluator and report aggregator return their domain types
//! (`AlertSummary`, `DailyReport`) directly; the batch-shaped functions get
//! their counters here.

use serde::Serialize;

use tiendaops_accounts::SeedResult;

/// Outcome of one task-reminder run.
#[derive(Debug, Default, Serialize)]
pub struct ReminderBatch {
    pub reminders_sent: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

/// Outcome of one price-update run.
#[derive(Debug, Default, Serialize)]
pub struct PriceUpdateBatch {
    pub updated: usize,
    pub unchanged: usize,
    pub errors: Vec<String>,
}

/// Outcome of one seeder run.
#[derive(Debug, Serialize)]
pub struct SeedBatch {
    pub results: Vec<SeedResult>,
}
