//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: storage + service wiring
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and their conversions to/from domain types
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router backed by a fresh in-memory store
/// (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with(Arc::new(services::AppServices::in_memory()))
}

/// Build the full HTTP router around existing services.
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(services)),
        )
}
