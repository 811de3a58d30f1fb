//! Read-only OData access to catalog menus and menu items

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::entity::create_response_for_entity;
use crate::error::ApiError;
use crate::odata::ODataPath;
use crate::state::AppState;

/// OData handler - GET /odata/v1/{*path}
///
/// Supports `Menus(k)`, `Menus(k)/Items`, `MenuItems(k)` and
/// `MenuItems(k)/Children`. Anything else is 501.
pub async fn odata_get(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let path = ODataPath::parse(&path)?;
    let entity_set = path.entity_set().ok_or(ApiError::NotImplemented)?;
    if path.len() < 2 {
        return Err(ApiError::NotImplemented);
    }

    let key = path
        .normalized_key(1)
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid key for {}", entity_set)))?;
    let catalog = &state.catalog;

    let response = match (entity_set, path.len(), path.navigation(2)) {
        ("Menus", 2, None) => create_response_for_entity(catalog.menu_by_id(key), key),
        ("Menus", 3, Some("Items")) => {
            create_response_for_entity(catalog.menu_by_id(key).map(|m| &m.items), key)
        }
        ("MenuItems", 2, None) => create_response_for_entity(catalog.item_by_id(key), key),
        ("MenuItems", 3, Some("Children")) => {
            create_response_for_entity(catalog.item_children(key), key)
        }
        _ => return Err(ApiError::NotImplemented),
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::state::test_support::state;

    async fn get(uri: &str) -> (StatusCode, Option<Value>) {
        let response = crate::router(state())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).ok())
    }

    #[tokio::test]
    async fn test_entities_and_navigation() {
        let (status, json) = get("/odata/v1/Menus(1)").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.unwrap()["system_name"], "Main");

        let (status, json) = get("/odata/v1/Menus('1')/Items").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.unwrap().as_array().unwrap().len(), 3);

        let (status, json) = get("/odata/v1/MenuItems(11)").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.unwrap()["title"], "Phones");

        let (status, json) = get("/odata/v1/MenuItems(11)/Children").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.unwrap()[0]["id"], 12);
    }

    #[tokio::test]
    async fn test_missing_entities_and_bad_paths() {
        let (status, json) = get("/odata/v1/Menus(42)").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.unwrap()["error"]["message"], "Entity with key 42 not found");

        let (status, _) = get("/odata/v1/Menus(abc)").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get("/odata/v1/Menus(1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = get("/odata/v1/Menus(1)/Owner").await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert!(body.is_none());

        let (status, _) = get("/odata/v1/Menus").await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    }
}
