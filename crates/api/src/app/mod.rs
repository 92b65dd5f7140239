//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared state handed to every handler
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and their validation into domain inputs
//! - `errors.rs`: consistent `{ "errorMessage": ... }` error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the tests).
pub fn build_app(config: &ApiConfig) -> Router {
    let services = Arc::new(services::AppServices::from_config(config));
    build_app_with(services)
}

/// Build the router around already-constructed services.
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_log))
                .layer(Extension(services)),
        )
}
