use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tiendaops_inventory::StockLevel;
use tiendaops_tasks::{Priority, TaskStatus};

/// Stock slice: row counts at and under the minimum threshold.
///
/// Critical rows (stock-outs) also count as low, matching the evaluator's
/// at-or-under-minimum band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockSummary {
    pub total: usize,
    pub low: usize,
    pub critical: usize,
}

pub fn summarize_stock(levels: &[StockLevel]) -> StockSummary {
    StockSummary {
        total: levels.len(),
        low: levels.iter().filter(|l| l.is_low()).count(),
        critical: levels.iter().filter(|l| l.is_out()).count(),
    }
}

/// Direction of a stock movement as stored by the hosted database.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    In,
    Out,
}

/// One stock movement row, reduced to what the report needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementEntry {
    pub quantity: i64,
    pub kind: MovementKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovementSummary {
    pub count: usize,
    pub units_in: i64,
    pub units_out: i64,
}

pub fn summarize_movements(entries: &[MovementEntry]) -> MovementSummary {
    let mut units_in = 0;
    let mut units_out = 0;
    for e in entries {
        match e.kind {
            MovementKind::In => units_in += e.quantity,
            MovementKind::Out => units_out += e.quantity,
        }
    }
    MovementSummary {
        count: entries.len(),
        units_in,
        units_out,
    }
}

/// One task row, reduced to what the report needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskEntry {
    pub status: TaskStatus,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    pub pending: usize,
    pub urgent_pending: usize,
    pub completed: usize,
}

pub fn summarize_tasks(entries: &[TaskEntry]) -> TaskSummary {
    TaskSummary {
        pending: entries
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .count(),
        urgent_pending: entries
            .iter()
            .filter(|t| t.status == TaskStatus::Pending && t.priority == Priority::Urgent)
            .count(),
        completed: entries
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count(),
    }
}

/// One price-history row, reduced to what the report needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChangeEntry {
    pub change_pct: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceChangeSummary {
    pub count: usize,
    pub avg_change_pct: Option<f64>,
}

/// Summarize price changes inside `[day_start, day_end)`.
///
/// The data API is queried with `gte.` only, so the upper bound is applied
/// here over the returned rows.
pub fn summarize_price_changes(
    entries: &[PriceChangeEntry],
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
) -> PriceChangeSummary {
    let in_window: Vec<&PriceChangeEntry> = entries
        .iter()
        .filter(|e| e.created_at >= day_start && e.created_at < day_end)
        .collect();

    let avg_change_pct = if in_window.is_empty() {
        None
    } else {
        let sum: f64 = in_window.iter().map(|e| e.change_pct).sum();
        Some((sum / in_window.len() as f64 * 100.0).round() / 100.0)
    };

    PriceChangeSummary {
        count: in_window.len(),
        avg_change_pct,
    }
}

/// The flat daily report, serialized with the JSON keys the dashboard
/// consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    #[serde(rename = "total_productos")]
    pub total_products: usize,
    #[serde(rename = "productos_stock_bajo")]
    pub low_stock_products: usize,
    #[serde(rename = "productos_criticos")]
    pub critical_products: usize,
    #[serde(rename = "movimientos_hoy")]
    pub today_movements: usize,
    #[serde(rename = "unidades_entrada")]
    pub units_in: i64,
    #[serde(rename = "unidades_salida")]
    pub units_out: i64,
    #[serde(rename = "tareas_pendientes")]
    pub pending_tasks: usize,
    #[serde(rename = "tareas_urgentes")]
    pub urgent_tasks: usize,
    #[serde(rename = "tareas_completadas")]
    pub completed_tasks: usize,
    #[serde(rename = "cambios_precio_ayer")]
    pub yesterday_price_changes: usize,
    #[serde(rename = "variacion_promedio_pct")]
    pub avg_price_change_pct: Option<f64>,
    #[serde(rename = "productos_faltantes")]
    pub missing_products: usize,
    #[serde(rename = "generado_en")]
    pub generated_at: DateTime<Utc>,
}

impl DailyReport {
    pub fn assemble(
        stock: StockSummary,
        movements: MovementSummary,
        tasks: TaskSummary,
        price_changes: PriceChangeSummary,
        missing_products: usize,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            total_products: stock.total,
            low_stock_products: stock.low,
            critical_products: stock.critical,
            today_movements: movements.count,
            units_in: movements.units_in,
            units_out: movements.units_out,
            pending_tasks: tasks.pending,
            urgent_tasks: tasks.urgent_pending,
            completed_tasks: tasks.completed,
            yesterday_price_changes: price_changes.count,
            avg_price_change_pct: price_changes.avg_change_pct,
            missing_products,
            generated_at,
        }
    }
}
