use axum::{routing::post, Router};

pub mod alerts;
pub mod prices;
pub mod reminders;
pub mod report;
pub mod seed;
pub mod system;

/// Router for the five function endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/functions/stock-alerts", post(alerts::evaluate))
        .route("/functions/task-reminders", post(reminders::send_pending))
        .route("/functions/price-update", post(prices::apply_simulated_feed))
        .route("/functions/daily-report", post(report::generate))
        .route("/functions/seed-users", post(seed::seed_demo_users))
}
