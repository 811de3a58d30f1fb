//! Validated entity processing for API actions

use std::future::Future;

use tracing::warn;
use validator::Validate;

use crate::error::ApiError;

/// Runs `process` once `model` validates.
///
/// An `ApiError` raised by `process` passes through untouched; any other
/// failure becomes `UnprocessableEntity` carrying the error message.
pub fn process_entity<M, T, F>(model: &M, process: F) -> Result<T, ApiError>
where
    M: Validate,
    F: FnOnce() -> anyhow::Result<T>,
{
    model.validate()?;
    process().map_err(into_api_error)
}

/// Async variant of [`process_entity`].
pub async fn process_entity_async<M, T, F, Fut>(model: &M, process: F) -> Result<T, ApiError>
where
    M: Validate,
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    model.validate()?;
    process().await.map_err(into_api_error)
}

fn into_api_error(err: anyhow::Error) -> ApiError {
    match err.downcast::<ApiError>() {
        Ok(api_error) => api_error,
        Err(other) => {
            warn!("Entity processing failed: {:#}", other);
            ApiError::UnprocessableEntity(other.to_string())
        }
    }
}
