//! Row structs mirroring the hosted schema.
//!
//! Read-side structs declare only the columns this service consumes (the
//! data API ignores extra columns on decode); write-side payloads (`New*`)
//! serialize exactly what gets inserted. None of these rows are owned here:
//! lifecycle and integrity belong to the hosted database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tiendaops_core::{ProductId, SupplierId, TaskId};
use tiendaops_reports::MovementKind;
use tiendaops_tasks::{Priority, TaskStatus};

/// `warehouse_stock`: one (product, location) quantity record.
#[derive(Debug, Clone, Deserialize)]
pub struct StockRow {
    pub id: Uuid,
    pub product_id: ProductId,
    pub current_quantity: i64,
    pub min_quantity: i64,
    pub location: Option<String>,
}

/// `products`: catalog entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub barcode: Option<String>,
    pub price: f64,
    pub supplier_id: Option<SupplierId>,
}

/// `suppliers`: name lookup for alert enrichment.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplierRow {
    pub id: SupplierId,
    pub name: String,
}

/// `tasks`: read side.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assigned_to: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

/// `tasks`: write side (the evaluator's restock follow-ups).
#[derive(Debug, Clone, Serialize)]
pub struct NewTaskRow {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assigned_to: String,
    pub due_date: DateTime<Utc>,
    pub created_by: String,
}

/// `notifications`: read side, only what the dedup check needs.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationRow {
    pub task_id: TaskId,
    pub created_at: DateTime<Utc>,
}

/// `notifications`: write side (append-only).
#[derive(Debug, Clone, Serialize)]
pub struct NewNotificationRow {
    pub task_id: TaskId,
    pub message: String,
    pub recipient: String,
    pub read: bool,
}

/// `price_history`: read side for the report slice.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceHistoryRow {
    pub change_pct: f64,
    pub created_at: DateTime<Utc>,
}

/// `price_history`: write side (append-only).
#[derive(Debug, Clone, Serialize)]
pub struct NewPriceHistoryRow {
    pub product_id: ProductId,
    pub price: f64,
    pub source: String,
    pub change_pct: f64,
}

/// `stock_movements`: read side for the report slice.
#[derive(Debug, Clone, Deserialize)]
pub struct MovementRow {
    pub quantity: i64,
    pub kind: MovementKind,
}

/// `missing_products`: read side for the report slice.
#[derive(Debug, Clone, Deserialize)]
pub struct MissingProductRow {
    pub id: Uuid,
}
