//! Entity responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use menu_shared::{constants::ENTITY_NOT_FOUND, utils::format_message};
use serde::Serialize;

use crate::error::ApiError;

/// 200 with the entity as JSON, or 404 naming the key.
pub fn create_response_for_entity<T: Serialize>(entity: Option<T>, key: i32) -> Response {
    match entity {
        Some(entity) => (StatusCode::OK, Json(entity)).into_response(),
        None => ApiError::NotFound(format_message(ENTITY_NOT_FOUND, key)).into_response(),
    }
}
