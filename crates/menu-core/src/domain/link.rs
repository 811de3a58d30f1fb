// ============================================================================
// Menu Core - Link Target
// File: crates/menu-core/src/domain/link.rs
// Description: Closed set of link kinds a menu item can point to
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog entity types that can be linked by slug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Category,
    Product,
    Manufacturer,
    Topic,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Category => "category",
            EntityKind::Product => "product",
            EntityKind::Manufacturer => "manufacturer",
            EntityKind::Topic => "topic",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a menu item points. One variant per menu-item kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LinkTarget {
    Entity {
        entity: EntityKind,
        id: i32,
    },
    Route {
        name: String,
        #[serde(default)]
        values: BTreeMap<String, String>,
    },
    Url {
        url: String,
    },
    #[default]
    None,
}

impl LinkTarget {
    pub fn route(name: &str) -> Self {
        LinkTarget::Route {
            name: name.to_string(),
            values: BTreeMap::new(),
        }
    }

    pub fn url(url: &str) -> Self {
        LinkTarget::Url { url: url.to_string() }
    }
}
