//! Application-wide constants

pub const ENV_PREFIX: &str = "MENU";
pub const DEFAULT_CULTURE: &str = "en";
pub const API_PREFIX: &str = "/api/v1";
pub const ODATA_PREFIX: &str = "/odata/v1";
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const ENTITY_NOT_FOUND: &str = "Entity with key {0} not found";
