//! Menu entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::MenuItemRecord;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuRecord {
    pub id: i32,
    #[validate(length(min = 1, max = 400, message = "System name must be between 1 and 400 characters"))]
    pub system_name: String,
    pub title: String,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<MenuItemRecord>,
}

fn default_published() -> bool {
    true
}

impl MenuRecord {
    pub fn item(&self, id: i32) -> Option<&MenuItemRecord> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Direct children of `parent` (`None` for top level), in display order.
    pub fn children_of(&self, parent: Option<i32>) -> Vec<&MenuItemRecord> {
        let mut children: Vec<_> = self
            .items
            .iter()
            .filter(|item| item.parent_item_id == parent)
            .collect();
        children.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.id.cmp(&b.id))
        });
        children
    }
}
