// ============================================================================
// Menu API - Menu Handlers
// File: crates/menu-api/src/handlers/menus.rs
// ============================================================================
//! Menu rendering handlers (catalog menus and ad-hoc previews)

use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    http::Uri,
    Json,
};
use menu_core::services::{MenuBuilder, MenuTree};
use menu_core::{MenuItemRecord, MenuRecord};
use menu_shared::utils::has_value;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::error::ApiError;
use crate::process::process_entity;
use crate::query::query_value;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Rendered menu
#[derive(Debug, Serialize)]
pub struct MenuView {
    pub system_name: String,
    pub editing: bool,
    pub tree: MenuTree,
}

/// Ad-hoc menu preview payload
#[derive(Debug, Deserialize, Validate)]
pub struct PreviewRequest {
    #[serde(default = "default_preview_title")]
    #[validate(length(min = 1, max = 400, message = "Title must be between 1 and 400 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 500, message = "Between 1 and 500 items are required"))]
    #[validate(nested)]
    pub items: Vec<MenuItemRecord>,

    #[serde(default)]
    pub editing: bool,
    #[serde(default)]
    pub lang: Option<String>,
}

fn default_preview_title() -> String {
    "Preview".to_string()
}

/// Render handler - GET /api/v1/menus/{system_name}?editing=&lang=
pub async fn render_menu(
    State(state): State<AppState>,
    Path(system_name): Path<String>,
    uri: Uri,
) -> Result<Json<ApiResponse<MenuView>>, ApiError> {
    let editing = query_value(&uri, "editing", false)?;
    let lang: String = query_value(&uri, "lang", String::new())?;

    let menu = state.catalog.menu(&system_name)?;
    if !menu.published && !editing {
        return Err(ApiError::Forbidden(Some(format!(
            "Menu {} is not published",
            menu.system_name
        ))));
    }

    let converter = state.converter_for(has_value(Some(lang.as_str())));
    let tree = MenuBuilder::new(&converter).build(menu, editing);

    Ok(Json(ApiResponse::success(MenuView {
        system_name: menu.system_name.clone(),
        editing,
        tree,
    })))
}

/// Preview handler - POST /api/v1/menus/preview
pub async fn preview_menu(
    State(state): State<AppState>,
    Json(payload): Json<PreviewRequest>,
) -> Result<Json<ApiResponse<MenuView>>, ApiError> {
    let view = process_entity(&payload, || {
        let mut seen = HashSet::new();
        if let Some(duplicate) = payload.items.iter().find(|item| !seen.insert(item.id)) {
            anyhow::bail!("Duplicate menu item id {}", duplicate.id);
        }

        let menu = MenuRecord {
            id: 0,
            system_name: "preview".to_string(),
            title: payload.title.clone(),
            published: true,
            items: payload.items.clone(),
        };
        let converter = state.converter_for(has_value(payload.lang.as_deref()));
        let tree = MenuBuilder::new(&converter).build(&menu, payload.editing);

        info!("Rendered preview with {} item(s)", menu.items.len());
        Ok(MenuView {
            system_name: menu.system_name,
            editing: payload.editing,
            tree,
        })
    })?;

    Ok(Json(ApiResponse::success(view)))
}
