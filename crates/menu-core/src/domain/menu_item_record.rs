// ============================================================================
// Menu Core - Menu Item Record
// File: crates/menu-core/src/domain/menu_item_record.rs
// Description: Navigation entry as stored by the content layer
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::LinkTarget;

/// Menu item record, read-only from the converter's point of view
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItemRecord {
    pub id: i32,
    #[serde(default)]
    pub menu_id: i32,
    #[serde(default)]
    pub parent_item_id: Option<i32>,

    #[validate(length(min = 1, max = 100, message = "Provider name must be between 1 and 100 characters"))]
    pub provider_name: String,

    #[serde(default)]
    pub link: LinkTarget,

    #[validate(length(max = 400, message = "Title too long"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 400, message = "Short description too long"))]
    pub short_description: Option<String>,

    #[serde(default)]
    pub permission_names: Vec<String>,

    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub begin_group: bool,
    #[serde(default)]
    pub show_expanded: bool,
    #[serde(default)]
    pub no_follow: bool,
    #[serde(default)]
    pub new_window: bool,

    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub html_id: Option<String>,
    #[serde(default)]
    pub css_class: Option<String>,
}

fn default_published() -> bool {
    true
}

impl MenuItemRecord {
    /// Creates a published record with no link, attributes, or icon.
    pub fn new(id: i32, provider_name: &str, title: &str) -> Self {
        Self {
            id,
            menu_id: 0,
            parent_item_id: None,
            provider_name: provider_name.to_string(),
            link: LinkTarget::None,
            title: title.to_string(),
            short_description: None,
            permission_names: Vec::new(),
            published: true,
            display_order: 0,
            begin_group: false,
            show_expanded: false,
            no_follow: false,
            new_window: false,
            icon: None,
            style: None,
            html_id: None,
            css_class: None,
        }
    }

    pub fn is_root_item(&self) -> bool {
        self.parent_item_id.is_none()
    }
}
