//! Bakery API Library
//!
//! Re-exports modules for integration testing and the binaries.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod repository;
mod error;

use axum::{middleware, routing::get, Router};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use domain::{Bakery, BakedGood, DomainError};
pub use error::{AppError, AppResult};

/// Build the application router around an open pool
pub fn build_router(pool: SqlitePool) -> Router {
    api::create_router()
        // Health check
        .route("/health", get(health_check))
        .layer(middleware::from_fn(api::middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
