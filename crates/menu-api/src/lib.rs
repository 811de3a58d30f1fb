//! # Menu API
//!
//! HTTP handlers, response envelope, and the Web API helpers shared by them.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod odata;
pub mod process;
pub mod query;
pub mod response;
pub mod state;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use menu_shared::constants::{API_PREFIX, MAX_UPLOAD_BYTES, ODATA_PREFIX};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Builds the application router with all routes and shared layers.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/menus/preview", post(handlers::menus::preview_menu))
        .route("/menus/import", post(handlers::import::import_catalog))
        .route("/menus/{system_name}", get(handlers::menus::render_menu));

    let odata_routes = Router::new().route("/{*path}", get(handlers::odata::odata_get));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
        .nest(API_PREFIX, api_routes)
        .nest(ODATA_PREFIX, odata_routes)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
