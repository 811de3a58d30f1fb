use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use menu_core::MenuCatalog;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    menus: usize,
}

pub async fn health_check(
    State(catalog): State<Arc<MenuCatalog>>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            menus: catalog.menus().len(),
        }),
    )
}

/// Ready once at least one menu is loaded.
pub async fn readiness_check(State(catalog): State<Arc<MenuCatalog>>) -> StatusCode {
    if catalog.menus().is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}
