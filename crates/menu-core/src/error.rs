//! Domain errors

use thiserror::Error;

use crate::domain::EntityKind;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Invalid menu item record {id}: {reason}")]
    InvalidRecord { id: i32, reason: String },

    #[error("Menu not found: {0}")]
    MenuNotFound(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),
}

impl MenuError {
    pub fn invalid_record(id: i32, errors: &validator::ValidationErrors) -> Self {
        MenuError::InvalidRecord {
            id,
            reason: errors.to_string(),
        }
    }
}

/// Link resolution failure for a single node. Never aborts siblings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("No slug registered for {entity} {id}")]
    EntityNotFound { entity: EntityKind, id: i32 },

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Route {route} is missing value for {{{placeholder}}}")]
    MissingRouteValue { route: String, placeholder: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
