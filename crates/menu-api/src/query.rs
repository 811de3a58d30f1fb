//! Query string values

use std::str::FromStr;

use axum::http::Uri;
use tracing::debug;
use url::form_urlencoded;

use crate::error::ApiError;

/// Reads query parameter `name` from `uri`, converted to `T`.
///
/// The key match is exact. Missing or unconvertible values yield `default`.
pub fn query_value<T: FromStr>(uri: &Uri, name: &str, default: T) -> Result<T, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::InternalError(
            "Query parameter name must not be empty".to_string(),
        ));
    }

    let Some(query) = uri.query() else {
        return Ok(default);
    };

    let raw = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned());

    Ok(match raw {
        Some(raw) => convert(&raw).unwrap_or_else(|| {
            debug!("Query value {}={} not convertible, using default", name, raw);
            default
        }),
        None => default,
    })
}

fn convert<T: FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    raw.parse()
        .ok()
        .or_else(|| raw.to_ascii_lowercase().parse().ok())
}
