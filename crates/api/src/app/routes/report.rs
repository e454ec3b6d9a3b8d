use std::sync::Arc;

use axum::extract::Extension;
use chrono::{Duration, Utc};

use tiendaops_db::rows::{MissingProductRow, MovementRow, PriceHistoryRow, StockRow, TaskRow};
use tiendaops_db::{DbError, Query, RestClient};
use tiendaops_inventory::StockLevel;
use tiendaops_reports::{
    summarize_movements, summarize_price_changes, summarize_stock, summarize_tasks, DailyReport,
    MovementEntry, PriceChangeEntry, TaskEntry,
};

use crate::app::{errors, services::AppServices};

/// `POST /functions/daily-report`
///
/// Five independent slices, each reduced with a pure fold; no cross-slice
/// joins beyond what the rows already carry.
pub async fn generate(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match build_report(&services.db).await {
        Ok(report) => errors::json_success(report),
        Err(e) => errors::json_error("daily_report_failed", e.to_string()),
    }
}

async fn build_report(db: &RestClient) -> Result<DailyReport, DbError> {
    let now = Utc::now();
    let today_start = now.date_naive().and_time(chrono::NaiveTime::MIN).and_utc();
    let yesterday_start = today_start - Duration::days(1);

    let stock: Vec<StockRow> = db
        .select("warehouse_stock", Query::new().select("*"))
        .await?;
    let mut levels = Vec::with_capacity(stock.len());
    for row in &stock {
        match StockLevel::new(row.current_quantity, row.min_quantity) {
            Ok(level) => levels.push(level),
            Err(e) => tracing::warn!(stock_id = %row.id, "skipping corrupt stock row: {e}"),
        }
    }

    let movements: Vec<MovementRow> = db
        .select(
            "stock_movements",
            Query::new()
                .select("*")
                .gte("created_at", today_start.to_rfc3339()),
        )
        .await?;
    let movement_entries: Vec<MovementEntry> = movements
        .iter()
        .map(|m| MovementEntry {
            quantity: m.quantity,
            kind: m.kind,
        })
        .collect();

    let tasks: Vec<TaskRow> = db.select("tasks", Query::new().select("*")).await?;
    let task_entries: Vec<TaskEntry> = tasks
        .iter()
        .map(|t| TaskEntry {
            status: t.status,
            priority: t.priority,
        })
        .collect();

    // The data API is queried with gte. only; the "before today" bound is
    // applied inside the fold.
    let price_rows: Vec<PriceHistoryRow> = db
        .select(
            "price_history",
            Query::new()
                .select("*")
                .gte("created_at", yesterday_start.to_rfc3339()),
        )
        .await?;
    let price_entries: Vec<PriceChangeEntry> = price_rows
        .iter()
        .map(|p| PriceChangeEntry {
            change_pct: p.change_pct,
            created_at: p.created_at,
        })
        .collect();

    let missing: Vec<MissingProductRow> = db
        .select(
            "missing_products",
            Query::new().select("*").eq("resolved", "false"),
        )
        .await?;

    Ok(DailyReport::assemble(
        summarize_stock(&levels),
        summarize_movements(&movement_entries),
        summarize_tasks(&task_entries),
        summarize_price_changes(&price_entries, yesterday_start, today_start),
        missing.len(),
        now,
    ))
}
