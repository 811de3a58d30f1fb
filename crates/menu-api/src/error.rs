use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use menu_core::MenuError;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid model state: {0}")]
    InvalidModelState(#[from] ValidationErrors),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Not implemented")]
    NotImplemented,

    #[error("Forbidden{}", .0.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Forbidden(Option<String>),

    #[error("Unsupported media type")]
    UnsupportedMediaType,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidModelState(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MenuError> for ApiError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::MenuNotFound(name) => ApiError::NotFound(format!("Menu not found: {}", name)),
            MenuError::InvalidRecord { .. } => ApiError::BadRequest(err.to_string()),
            MenuError::CatalogError(msg) => ApiError::UnprocessableEntity(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_type, message, details) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                ("BadRequest", msg, None)
            }
            ApiError::InvalidModelState(errors) => {
                tracing::warn!("Invalid model state: {}", errors);
                ("InvalidModelState", "The request is invalid.".to_string(), Some(model_state(&errors)))
            }
            ApiError::UnprocessableEntity(msg) => {
                tracing::warn!("Unprocessable entity: {}", msg);
                ("UnprocessableEntity", msg, None)
            }
            ApiError::Forbidden(Some(msg)) => {
                tracing::warn!("Forbidden: {}", msg);
                ("Forbidden", msg, None)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                ("NotFound", msg, None)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                ("InternalError", msg, None)
            }
            // Bare status, no body
            ApiError::NotImplemented | ApiError::Forbidden(None) | ApiError::UnsupportedMediaType => {
                tracing::warn!("Request rejected with {}", status);
                return status.into_response();
            }
        };

        let body = Json(ApiResponse::<()>::error_with_details(error_type, &message, details));
        (status, body).into_response()
    }
}

/// Flattens validation errors into `field.path -> messages`.
pub fn model_state(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut out = BTreeMap::new();
    collect_model_state("", errors, &mut out);
    out
}

fn collect_model_state(
    prefix: &str,
    errors: &ValidationErrors,
    out: &mut BTreeMap<String, Vec<String>>,
) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages = out.entry(path).or_insert_with(Vec::new);
                for e in list {
                    messages.push(
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string()),
                    );
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_model_state(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_model_state(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Model {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UnprocessableEntity("x".into()).status().as_u16(), 422);
        assert_eq!(ApiError::NotImplemented.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(ApiError::Forbidden(None).status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::UnsupportedMediaType.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InternalError("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_forbidden_display() {
        assert_eq!(ApiError::Forbidden(None).to_string(), "Forbidden");
        assert_eq!(
            ApiError::Forbidden(Some("menu locked".into())).to_string(),
            "Forbidden: menu locked"
        );
    }

    #[test]
    fn test_model_state_collects_messages() {
        let errors = Model { name: String::new() }.validate().unwrap_err();
        let state = model_state(&errors);
        assert_eq!(state["name"], vec!["Name is required".to_string()]);

        let response = ApiError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_menu_error_mapping() {
        let err: ApiError = MenuError::MenuNotFound("footer".into()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
