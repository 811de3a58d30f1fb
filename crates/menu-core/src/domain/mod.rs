//! # Menu Core - Domain Module
//!
//! Records read from the catalog and the values produced while rendering.

pub mod language;
pub mod link;
pub mod menu;
pub mod menu_item;
pub mod menu_item_record;
pub mod tree;

pub use language::Language;
pub use link::{EntityKind, LinkTarget};
pub use menu::MenuRecord;
pub use menu_item::MenuItem;
pub use menu_item_record::MenuItemRecord;
pub use tree::TreeNode;
