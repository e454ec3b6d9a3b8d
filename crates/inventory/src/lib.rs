//! `tiendaops-inventory` — stock-alert evaluation domain.
//!
//! Pure classification over warehouse stock levels; no I/O. Callers fetch the
//! stock snapshot, feed each row through [`StockLevel::classify`], and decide
//! what to write back.

pub mod alert;

pub use alert::{
    AlertSummary, RestockTask, Severity, StockAlert, StockLevel, RESTOCK_ASSIGNEE,
    RESTOCK_CREATOR, UNASSIGNED,
};
