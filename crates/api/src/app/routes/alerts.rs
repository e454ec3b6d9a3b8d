use std::sync::Arc;

use axum::extract::Extension;
use chrono::Utc;

use tiendaops_core::ProductId;
use tiendaops_db::rows::{NewTaskRow, ProductRow, StockRow, SupplierRow};
use tiendaops_db::{DbError, Query, RestClient};
use tiendaops_inventory::{
    AlertSummary, RestockTask, Severity, StockAlert, StockLevel, RESTOCK_ASSIGNEE, RESTOCK_CREATOR,
    UNASSIGNED,
};
use tiendaops_tasks::{Priority, TaskStatus};

use crate::app::{errors, services::AppServices};

/// `POST /functions/stock-alerts`
///
/// Evaluates the full warehouse snapshot, opens a restock task per critical
/// item, and returns the alert list. There is no dedup against earlier
/// invocations: items still at zero get a fresh task every run.
pub async fn evaluate(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match evaluate_stock(&services.db).await {
        Ok(summary) => errors::json_success(summary),
        Err(e) => errors::json_error("stock_alert_failed", e.to_string()),
    }
}

async fn evaluate_stock(db: &RestClient) -> Result<AlertSummary, DbError> {
    let stock: Vec<StockRow> = db
        .select("warehouse_stock", Query::new().select("*"))
        .await?;

    let mut alerts = Vec::new();
    for row in stock {
        let level = match StockLevel::new(row.current_quantity, row.min_quantity) {
            Ok(level) => level,
            Err(e) => {
                tracing::warn!(stock_id = %row.id, "skipping corrupt stock row: {e}");
                continue;
            }
        };
        let Some(severity) = level.classify() else {
            continue;
        };

        let (product_name, supplier_name) = display_names(db, row.product_id).await;
        let alert = StockAlert {
            product_id: row.product_id,
            product_name,
            supplier_name,
            location: row.location,
            current_quantity: row.current_quantity,
            min_quantity: row.min_quantity,
            severity,
        };

        if severity == Severity::Critical {
            if let Err(e) = open_restock_task(db, &alert).await {
                tracing::warn!(product_id = %alert.product_id, "failed to open restock task: {e}");
            }
        }

        alerts.push(alert);
    }

    Ok(AlertSummary::from_alerts(alerts))
}

/// Product and supplier display names for an alert.
///
/// A lookup that fails or references nothing falls back to "unassigned";
/// name enrichment is never worth failing the batch over.
async fn display_names(db: &RestClient, product_id: ProductId) -> (String, String) {
    let product = match db
        .select_one::<ProductRow>("products", Query::new().select("*").eq("id", product_id))
        .await
    {
        Ok(product) => product,
        Err(e) => {
            tracing::warn!(product_id = %product_id, "product lookup failed: {e}");
            None
        }
    };

    let Some(product) = product else {
        return (UNASSIGNED.to_string(), UNASSIGNED.to_string());
    };

    let supplier_name = match product.supplier_id {
        None => UNASSIGNED.to_string(),
        Some(supplier_id) => match db
            .select_one::<SupplierRow>("suppliers", Query::new().select("*").eq("id", supplier_id))
            .await
        {
            Ok(Some(supplier)) => supplier.name,
            Ok(None) => UNASSIGNED.to_string(),
            Err(e) => {
                tracing::warn!(supplier_id = %supplier_id, "supplier lookup failed: {e}");
                UNASSIGNED.to_string()
            }
        },
    };

    (product.name, supplier_name)
}

async fn open_restock_task(db: &RestClient, alert: &StockAlert) -> Result<(), DbError> {
    let task = RestockTask::for_alert(alert, Utc::now());
    db.insert(
        "tasks",
        &NewTaskRow {
            title: task.title,
            description: task.description,
            priority: Priority::Urgent,
            status: TaskStatus::Pending,
            assigned_to: RESTOCK_ASSIGNEE.to_string(),
            due_date: task.due_date,
            created_by: RESTOCK_CREATOR.to_string(),
        },
    )
    .await
}
