//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store selection and the injected `AppServices` handle
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router around an injected service handle.
pub fn build_app(services: AppServices) -> Router {
    routes::router()
        .route("/health", get(routes::system::health))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(Arc::new(services))),
        )
}
