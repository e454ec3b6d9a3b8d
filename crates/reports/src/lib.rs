//! `tiendaops-reports` — daily report aggregation.
//!
//! Pure folds over the five table slices the aggregator fetches. Stock and
//! task vocabulary is shared with `tiendaops-inventory` / `tiendaops-tasks`
//! so the report counts can never drift from what the evaluator flags.

pub mod summary;

pub use summary::{
    summarize_movements, summarize_price_changes, summarize_stock, summarize_tasks, DailyReport,
    MovementEntry, MovementKind, MovementSummary, PriceChangeEntry, PriceChangeSummary,
    StockSummary, TaskEntry, TaskSummary,
};
