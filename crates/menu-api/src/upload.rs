use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ApiError;

/// A multipart file part spooled to disk
#[derive(Debug, Clone, Serialize)]
pub struct LocalFile {
    pub field_name: String,
    pub file_name: Option<String>,
    #[serde(skip)]
    pub local_path: PathBuf,
    pub size: usize,
}

/// Writes every file part of `multipart` into `dir`.
///
/// Non-file fields are skipped. A file part beyond `max_files` is rejected
/// before it is written. On failure, files already written are removed
/// before the error is returned.
pub async fn save_multipart_files(
    multipart: &mut Multipart,
    dir: &Path,
    max_files: usize,
) -> Result<Vec<LocalFile>, ApiError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| ApiError::InternalError(format!("Failed to create upload dir: {}", e)))?;

    let mut files = Vec::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                delete_local_files(&files).await;
                return Err(ApiError::BadRequest(format!("Failed to read field: {}", e)));
            }
        };

        let Some(file_name) = field.file_name().map(str::to_string) else {
            debug!("Skipping non-file field {:?}", field.name());
            continue;
        };
        if files.len() >= max_files {
            delete_local_files(&files).await;
            return Err(ApiError::BadRequest(format!(
                "At most {} file(s) may be uploaded at once",
                max_files
            )));
        }
        let field_name = field.name().unwrap_or("").to_string();

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                delete_local_files(&files).await;
                return Err(ApiError::BadRequest(format!("Failed to read file: {}", e)));
            }
        };

        let local_path = dir.join(format!("BodyPart_{}", Uuid::new_v4()));
        if let Err(e) = tokio::fs::write(&local_path, &bytes).await {
            delete_local_files(&files).await;
            return Err(ApiError::InternalError(format!("Failed to store upload: {}", e)));
        }

        debug!("Stored upload {} as {}", file_name, local_path.display());
        files.push(LocalFile {
            field_name,
            file_name: Some(file_name),
            local_path,
            size: bytes.len(),
        });
    }

    info!("Stored {} uploaded file(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Best-effort removal of spooled uploads. Failures are logged, never raised.
pub async fn delete_local_files(files: &[LocalFile]) {
    for file in files {
        match tokio::fs::remove_file(&file.local_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to delete {}: {}", file.local_path.display(), e),
        }
    }
}
