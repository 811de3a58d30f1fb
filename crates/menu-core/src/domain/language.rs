//! Display language

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub culture: String,
    #[serde(default)]
    pub rtl: bool,
}

impl Language {
    pub fn new(culture: &str, rtl: bool) -> Self {
        Self {
            culture: culture.to_string(),
            rtl,
        }
    }
}
