// ============================================================================
// Menu Core - Menu Item Converter
// File: crates/menu-core/src/services/converter.rs
// ============================================================================
//! Converts menu item records into tree nodes ready for rendering

use std::sync::Arc;

use menu_shared::utils::has_value;
use tracing::{debug, warn};
use validator::Validate;

use crate::domain::{MenuItem, MenuItemRecord, TreeNode};
use crate::error::MenuError;
use crate::services::context::MenuRenderContext;
use crate::services::icons::IconExplorer;
use crate::services::links::LinkResolver;
use crate::services::localization::{LocalizedField, Localizer};

/// Appends menu item records to a menu tree
#[derive(Clone)]
pub struct MenuItemConverter {
    localizer: Arc<dyn Localizer>,
    icons: Arc<dyn IconExplorer>,
    links: Arc<LinkResolver>,
}

impl MenuItemConverter {
    pub fn new(
        localizer: Arc<dyn Localizer>,
        icons: Arc<dyn IconExplorer>,
        links: Arc<LinkResolver>,
    ) -> Self {
        Self {
            localizer,
            icons,
            links,
        }
    }

    /// Appends `entity` below `parent` and returns the new item node.
    ///
    /// Outside of menu editing, a `begin_group` record is preceded by a
    /// group header node. Link failures are recorded on `ctx` and leave
    /// the node without a url; they do not fail the call.
    pub fn append<'a>(
        &self,
        parent: &'a mut TreeNode<MenuItem>,
        entity: &MenuItemRecord,
        ctx: &mut MenuRenderContext,
    ) -> Result<&'a mut TreeNode<MenuItem>, MenuError> {
        entity
            .validate()
            .map_err(|e| MenuError::invalid_record(entity.id, &e))?;

        if entity.begin_group && !ctx.is_menu_editing {
            let text = self
                .localizer
                .localize(entity, LocalizedField::ShortDescription)
                .value;
            append_to_parent(parent, MenuItem::group_header(text), entity, ctx);
        }

        let item = self.convert_to_menu_item(entity, ctx.is_menu_editing);
        let node = append_to_parent(parent, item, entity, ctx);

        if let Err(error) = self.links.apply(node, &entity.link) {
            warn!(
                "Failed to build link for menu item {} ({}): {}",
                entity.id, entity.provider_name, error
            );
            ctx.record_link_failure(entity.id, &entity.provider_name, error);
        }

        Ok(node)
    }

    /// Maps a record to a menu item without touching any tree.
    pub fn convert_to_menu_item(&self, entity: &MenuItemRecord, is_menu_editing: bool) -> MenuItem {
        let title = self.localizer.localize(entity, LocalizedField::Title);
        let short_description = self
            .localizer
            .localize(entity, LocalizedField::ShortDescription);

        let mut item = MenuItem {
            entity_id: Some(entity.id),
            rtl: title.is_rtl(),
            text: title.value,
            visible: entity.published,
            permission_names: entity.permission_names.clone(),
            ..MenuItem::default()
        };

        let attrs = &mut item.link_html_attributes;
        if has_value(Some(short_description.value.as_str())).is_some() {
            attrs.insert("title".into(), short_description.value.clone());
        }
        if entity.no_follow {
            attrs.insert("rel".into(), "nofollow".into());
        }
        if entity.new_window {
            attrs.insert("target".into(), "_blank".into());
        }
        // Values are stored untouched; blank ones are dropped.
        if let Some(class) = non_blank(&entity.css_class) {
            attrs.insert("class".into(), class.clone());
        }
        if let Some(id) = non_blank(&entity.html_id) {
            attrs.insert("id".into(), id.clone());
        }

        if !is_menu_editing {
            if let Some(icon) = has_value(entity.icon.as_deref()) {
                let css = self
                    .icons
                    .icon_by_name(icon)
                    .css_class(entity.style.as_deref());
                debug!("Menu item {} icon {} -> '{}'", entity.id, icon, css);
                item.icon = Some(css);
            }
        }

        item
    }
}

fn non_blank(value: &Option<String>) -> Option<&String> {
    value
        .as_ref()
        .filter(|v| has_value(Some(v.as_str())).is_some())
}

fn append_to_parent<'a>(
    parent: &'a mut TreeNode<MenuItem>,
    item: MenuItem,
    entity: &MenuItemRecord,
    ctx: &mut MenuRenderContext,
) -> &'a mut TreeNode<MenuItem> {
    ctx.providers.insert(&entity.provider_name);

    let mut node = TreeNode::new(item);
    node.set_provider(&entity.provider_name);
    parent.append(node)
}
