//! Menu tree assembly

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::domain::{MenuItem, MenuRecord, TreeNode};
use crate::services::context::{MenuRenderContext, MenuTree};
use crate::services::converter::MenuItemConverter;

/// Builds a full menu tree from a menu record's flat item list.
pub struct MenuBuilder<'a> {
    converter: &'a MenuItemConverter,
}

impl<'a> MenuBuilder<'a> {
    pub fn new(converter: &'a MenuItemConverter) -> Self {
        Self { converter }
    }

    pub fn build(&self, menu: &MenuRecord, is_menu_editing: bool) -> MenuTree {
        let mut root = TreeNode::new(MenuItem {
            entity_id: Some(menu.id),
            visible: menu.published,
            ..MenuItem::with_text(menu.title.clone())
        });
        let mut ctx = MenuRenderContext::new(is_menu_editing);

        let mut visited = HashSet::new();
        self.append_children(menu, None, &mut root, &mut ctx, &mut visited);

        let skipped = menu.items.len().saturating_sub(count_items(&root));
        if skipped > 0 {
            debug!(
                "Menu {}: {} item(s) not reachable from the root were skipped",
                menu.system_name, skipped
            );
        }

        info!(
            "Built menu {} with {} node(s) from {} provider(s)",
            menu.system_name,
            root.descendant_count(),
            ctx.providers.len()
        );

        ctx.into_tree(root)
    }

    fn append_children(
        &self,
        menu: &MenuRecord,
        parent_id: Option<i32>,
        parent: &mut TreeNode<MenuItem>,
        ctx: &mut MenuRenderContext,
        visited: &mut HashSet<i32>,
    ) {
        for record in menu.children_of(parent_id) {
            // An id is rendered at most once, so repeated or self-parented ids terminate.
            if !visited.insert(record.id) {
                warn!(
                    "Skipping repeated menu item {} in {}",
                    record.id, menu.system_name
                );
                continue;
            }
            match self.converter.append(parent, record, ctx) {
                Ok(node) => self.append_children(menu, Some(record.id), node, ctx, visited),
                Err(e) => warn!("Skipping menu item in {}: {}", menu.system_name, e),
            }
        }
    }
}

/// Item nodes in the tree, group headers excluded.
fn count_items(root: &TreeNode<MenuItem>) -> usize {
    root.walk()
        .into_iter()
        .skip(1)
        .filter(|node| !node.value.is_group_header)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, LinkTarget, MenuItemRecord};
    use crate::services::icons::IconCatalog;
    use crate::services::links::{LinkResolver, SlugTable};
    use crate::services::localization::{TranslationTable, WorkingLanguageLocalizer};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn converter() -> MenuItemConverter {
        let en = Language::new("en", false);
        let localizer = WorkingLanguageLocalizer::new(
            Arc::new(TranslationTable::new()),
            en.clone(),
            en,
        );
        let routes = HashMap::from([("homepage".to_string(), "/".to_string())]);
        MenuItemConverter::new(
            Arc::new(localizer),
            Arc::new(IconCatalog::with_defaults()),
            Arc::new(LinkResolver::new("/", &routes, Arc::new(SlugTable::new()))),
        )
    }

    fn item(id: i32, parent: Option<i32>, order: i32, provider: &str) -> MenuItemRecord {
        let mut record = MenuItemRecord::new(id, provider, &format!("Item {}", id));
        record.parent_item_id = parent;
        record.display_order = order;
        record
    }

    fn menu(items: Vec<MenuItemRecord>) -> MenuRecord {
        MenuRecord {
            id: 1,
            system_name: "Main".into(),
            title: "Main menu".into(),
            published: true,
            items,
        }
    }

    #[test]
    fn test_build_nests_and_orders_items() {
        let mut grouped = item(4, Some(1), 0, "catalog");
        grouped.begin_group = true;
        grouped.short_description = Some("More".into());
        let menu = menu(vec![
            item(1, None, 2, "route"),
            item(2, None, 1, "Route"),
            item(3, Some(1), 1, "url"),
            grouped,
        ]);

        let converter = converter();
        let tree = MenuBuilder::new(&converter).build(&menu, false);

        let top: Vec<&str> = tree.root.children().iter().map(|n| n.value.text.as_str()).collect();
        assert_eq!(top, vec!["Item 2", "Item 1"]);

        let nested = tree.root.children()[1].children();
        assert_eq!(nested.len(), 3);
        assert!(nested[0].value.is_group_header);
        assert_eq!(nested[1].value.text, "Item 4");
        assert_eq!(nested[2].value.text, "Item 3");

        assert_eq!(tree.providers.len(), 3);
        assert!(tree.contains_provider("CATALOG"));
    }

    #[test]
    fn test_orphans_and_invalid_records_are_skipped() {
        let mut broken = item(6, None, 0, "route");
        broken.provider_name = String::new();
        let mut linked = item(7, None, 1, "route");
        linked.link = LinkTarget::route("homepage");
        let menu = menu(vec![item(5, Some(99), 0, "route"), broken, linked]);

        let converter = converter();
        let tree = MenuBuilder::new(&converter).build(&menu, false);

        assert_eq!(tree.root.children().len(), 1);
        assert_eq!(tree.root.children()[0].value.url.as_deref(), Some("/"));
    }

    #[test]
    fn test_repeated_and_self_parented_ids_terminate() {
        let menu = menu(vec![
            item(1, None, 0, "route"),
            item(1, Some(1), 1, "route"),
            item(2, Some(2), 2, "route"),
        ]);

        let converter = converter();
        let tree = MenuBuilder::new(&converter).build(&menu, false);

        assert_eq!(tree.root.children().len(), 1);
        assert!(tree.root.children()[0].is_leaf());
        assert_eq!(tree.root.descendant_count(), 1);
    }

    #[test]
    fn test_parent_cycle_is_never_visited() {
        let menu = menu(vec![item(8, Some(9), 0, "route"), item(9, Some(8), 0, "route")]);

        let converter = converter();
        let tree = MenuBuilder::new(&converter).build(&menu, true);

        assert!(tree.root.is_leaf());
        assert!(tree.providers.is_empty());
    }
}
