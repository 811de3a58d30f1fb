// ============================================================================
// Menu Core - Menu Item
// File: crates/menu-core/src/domain/menu_item.rs
// Description: Renderable menu item produced per render pass
// ============================================================================

use indexmap::IndexMap;
use serde::Serialize;

/// Renderable menu item. Link attributes keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<i32>,
    pub text: String,
    pub visible: bool,
    pub rtl: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub link_html_attributes: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub is_group_header: bool,
    pub permission_names: Vec<String>,
}

impl Default for MenuItem {
    fn default() -> Self {
        Self {
            entity_id: None,
            text: String::new(),
            visible: true,
            rtl: false,
            url: None,
            link_html_attributes: IndexMap::new(),
            icon: None,
            is_group_header: false,
            permission_names: Vec::new(),
        }
    }
}

impl MenuItem {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Non-clickable divider preceding a group of items.
    pub fn group_header(text: impl Into<String>) -> Self {
        Self {
            is_group_header: true,
            ..Self::with_text(text)
        }
    }

    pub fn has_link(&self) -> bool {
        self.url.is_some()
    }
}
