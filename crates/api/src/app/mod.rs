//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: client wiring (data API + identity admin API)
//! - `routes/`: HTTP routes + handlers (one file per function)
//! - `dto.rs`: response DTOs
//! - `errors.rs`: consistent response envelopes

use std::sync::Arc;

use axum::http::{header, Method};
use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use tiendaops_db::DbConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: DbConfig) -> Router {
    let services = Arc::new(services::build_services(&config));

    // The dashboard calls the function endpoints straight from the browser;
    // preflights get a fixed permissive policy.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)).layer(cors))
}
