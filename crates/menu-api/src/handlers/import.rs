// ============================================================================
// Menu API - Import Handler
// File: crates/menu-api/src/handlers/import.rs
// ============================================================================
//! Multipart catalog import. Uploaded files are validated, reported on and
//! then removed from the upload directory whatever the outcome.

use std::path::Path;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::Uri,
    Json,
};
use menu_core::MenuCatalog;
use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

use crate::error::ApiError;
use crate::process::process_entity_async;
use crate::query::query_value;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::upload::{delete_local_files, save_multipart_files, LocalFile};

#[derive(Debug, Validate)]
pub struct ImportOptions {
    /// Fail the whole import on the first invalid file.
    pub strict: bool,
    #[validate(range(min = 1, max = 20, message = "max_files must be between 1 and 20"))]
    pub max_files: u32,
}

impl ImportOptions {
    fn from_uri(uri: &Uri) -> Result<Self, ApiError> {
        Ok(Self {
            strict: query_value(uri, "strict", false)?,
            max_files: query_value(uri, "max_files", 10)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ImportedFile {
    #[serde(flatten)]
    pub file: LocalFile,
    pub menus: usize,
    pub items: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImportReport {
    pub accepted: usize,
    pub rejected: usize,
    pub files: Vec<ImportedFile>,
}

/// Import handler - POST /api/v1/menus/import?strict=&max_files=
pub async fn import_catalog(
    State(state): State<AppState>,
    uri: Uri,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<ImportReport>>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        warn!("Import rejected: {}", e);
        ApiError::UnsupportedMediaType
    })?;
    let options = ImportOptions::from_uri(&uri)?;

    let upload_dir = state.config.menu.upload_dir.as_path();
    let multipart = &mut multipart;
    let opts = &options;
    let report = process_entity_async(&options, move || async move {
        import_files(upload_dir, multipart, opts).await
    })
    .await?;

    info!(
        "Catalog import finished: {} accepted, {} rejected",
        report.accepted, report.rejected
    );
    Ok(Json(ApiResponse::success(report)))
}

async fn import_files(
    dir: &Path,
    multipart: &mut Multipart,
    options: &ImportOptions,
) -> anyhow::Result<ImportReport> {
    let files = save_multipart_files(multipart, dir, options.max_files as usize).await?;
    let result = inspect_files(&files, options).await;
    delete_local_files(&files).await;
    result
}

async fn inspect_files(files: &[LocalFile], options: &ImportOptions) -> anyhow::Result<ImportReport> {
    if files.is_empty() {
        return Err(ApiError::BadRequest("No files uploaded".to_string()).into());
    }

    let mut report = ImportReport {
        accepted: 0,
        rejected: 0,
        files: Vec::with_capacity(files.len()),
    };

    for file in files {
        let name = file.file_name.as_deref().unwrap_or(&file.field_name);
        let json = tokio::fs::read_to_string(&file.local_path).await?;

        let entry = match MenuCatalog::from_json_str(&json) {
            Ok(catalog) => {
                report.accepted += 1;
                ImportedFile {
                    file: file.clone(),
                    menus: catalog.menus().len(),
                    items: catalog.menus().iter().map(|m| m.items.len()).sum(),
                    error: None,
                }
            }
            Err(e) if options.strict => anyhow::bail!("{}: {}", name, e),
            Err(e) => {
                warn!("Rejected catalog file {}: {}", name, e);
                report.rejected += 1;
                ImportedFile {
                    file: file.clone(),
                    menus: 0,
                    items: 0,
                    error: Some(e.to_string()),
                }
            }
        };
        report.files.push(entry);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::state::test_support::state_with_upload_dir;

    const BOUNDARY: &str = "menu-import-boundary";

    fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> String {
        let mut body = String::new();
        for (name, file_name, content) in parts {
            body.push_str(&format!("--{}\r\n", BOUNDARY));
            match file_name {
                Some(file_name) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/json\r\n\r\n",
                    name, file_name
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                    name
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{}--\r\n", BOUNDARY));
        body
    }

    fn import_request(uri: &str, body: String) -> Request<Body> {
        Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn is_empty_dir(dir: &std::path::Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn test_import_reports_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let app = crate::router(state_with_upload_dir(dir.path()));

        let valid = r#"{"menus":[{"id":1,"system_name":"Footer","title":"Footer",
            "items":[{"id":1,"provider_name":"url","title":"About"}]}]}"#;
        let body = multipart_body(&[
            ("note", None, "ignored"),
            ("file", Some("footer.json"), valid),
            ("file", Some("broken.json"), "{ nope"),
        ]);

        let response = app
            .oneshot(import_request("/api/v1/menus/import", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["data"]["accepted"], 1);
        assert_eq!(json["data"]["rejected"], 1);
        assert_eq!(json["data"]["files"][0]["file_name"], "footer.json");
        assert_eq!(json["data"]["files"][0]["items"], 1);
        assert!(json["data"]["files"][1]["error"].is_string());

        assert!(is_empty_dir(dir.path()));
    }

    #[tokio::test]
    async fn test_strict_import_fails_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let app = crate::router(state_with_upload_dir(dir.path()));

        let body = multipart_body(&[("file", Some("broken.json"), "{ nope")]);
        let response = app
            .oneshot(import_request("/api/v1/menus/import?strict=true", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(is_empty_dir(dir.path()));
    }

    #[tokio::test]
    async fn test_files_beyond_limit_are_rejected_unwritten() {
        let dir = tempfile::tempdir().unwrap();
        let app = crate::router(state_with_upload_dir(dir.path()));

        let body = multipart_body(&[
            ("file", Some("a.json"), "{}"),
            ("file", Some("b.json"), "{}"),
        ]);
        let response = app
            .oneshot(import_request("/api/v1/menus/import?max_files=1", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["message"],
            "At most 1 file(s) may be uploaded at once"
        );
        assert!(is_empty_dir(dir.path()));
    }

    #[tokio::test]
    async fn test_import_rejections() {
        let dir = tempfile::tempdir().unwrap();
        let app = crate::router(state_with_upload_dir(dir.path()));

        let no_files = multipart_body(&[("note", None, "only text")]);
        let response = app
            .clone()
            .oneshot(import_request("/api/v1/menus/import", no_files))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = multipart_body(&[("file", Some("a.json"), "{}")]);
        let response = app
            .clone()
            .oneshot(import_request("/api/v1/menus/import?max_files=0", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "InvalidModelState");

        let response = app
            .oneshot(
                Request::post("/api/v1/menus/import")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
