use std::sync::Arc;

use axum::extract::Extension;
use rand::Rng;
use serde_json::json;

use tiendaops_core::ProductId;
use tiendaops_db::rows::{NewPriceHistoryRow, ProductRow};
use tiendaops_db::{DbError, Query, RestClient};
use tiendaops_pricing::{simulate, PriceUpdate, VARIATION_MAX, VARIATION_MIN};

use crate::app::dto::PriceUpdateBatch;
use crate::app::{errors, services::AppServices};

/// Source label written to the history log by this simulation.
const FEED_SOURCE: &str = "simulated_feed";

/// `POST /functions/price-update`
///
/// Simulation stand-in for a real price feed: each active, barcoded product
/// gets a random variation drawn here at the edge; the pricing rules decide
/// whether anything is written.
pub async fn apply_simulated_feed(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match update_prices(&services.db).await {
        Ok(batch) => errors::json_success(batch),
        Err(e) => errors::json_error("price_update_failed", e.to_string()),
    }
}

async fn update_prices(db: &RestClient) -> Result<PriceUpdateBatch, DbError> {
    let products: Vec<ProductRow> = db
        .select("products", Query::new().select("*").eq("active", "true"))
        .await?;

    let mut batch = PriceUpdateBatch::default();
    for product in products.into_iter().filter(|p| p.barcode.is_some()) {
        let factor = rand::thread_rng().gen_range(VARIATION_MIN..=VARIATION_MAX);
        let Some(update) = simulate(product.price, factor) else {
            batch.unchanged += 1;
            continue;
        };

        match write_update(db, product.id, &update).await {
            Ok(()) => batch.updated += 1,
            Err(e) => batch.errors.push(format!("product {}: {e}", product.id)),
        }
    }

    Ok(batch)
}

async fn write_update(
    db: &RestClient,
    product_id: ProductId,
    update: &PriceUpdate,
) -> Result<(), DbError> {
    db.update(
        "products",
        Query::new().eq("id", product_id),
        &json!({ "price": update.new_price }),
    )
    .await?;

    db.insert(
        "price_history",
        &NewPriceHistoryRow {
            product_id,
            price: update.new_price,
            source: FEED_SOURCE.to_string(),
            change_pct: update.change_pct,
        },
    )
    .await
}
