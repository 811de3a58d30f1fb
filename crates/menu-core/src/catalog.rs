// ============================================================================
// Menu Core - Menu Catalog
// File: crates/menu-core/src/catalog.rs
// Description: Read-only menus, translations and slugs loaded at startup
// ============================================================================

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::domain::{MenuItemRecord, MenuRecord};
use crate::error::MenuError;
use crate::services::links::{Slug, SlugTable};
use crate::services::localization::{Translation, TranslationTable};

#[derive(Debug, Clone, Deserialize, Default)]
struct CatalogFile {
    #[serde(default)]
    menus: Vec<MenuRecord>,
    #[serde(default)]
    translations: Vec<Translation>,
    #[serde(default)]
    slugs: Vec<Slug>,
}

#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    menus: Vec<MenuRecord>,
    translations: TranslationTable,
    slugs: SlugTable,
}

impl MenuCatalog {
    pub fn from_json_str(json: &str) -> Result<Self, MenuError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| MenuError::CatalogError(e.to_string()))?;

        for menu in &file.menus {
            menu.validate().map_err(|e| {
                MenuError::CatalogError(format!("menu {}: {}", menu.system_name, e))
            })?;

            let mut ids = HashSet::new();
            if let Some(item) = menu.items.iter().find(|item| !ids.insert(item.id)) {
                return Err(MenuError::CatalogError(format!(
                    "menu {}: duplicate item id {}",
                    menu.system_name, item.id
                )));
            }
        }

        Ok(Self {
            menus: file.menus,
            translations: file.translations.into_iter().collect(),
            slugs: file.slugs.into_iter().collect(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, MenuError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| MenuError::CatalogError(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json_str(&json)?;

        info!(
            "Loaded menu catalog from {}: {} menu(s), {} translation(s), {} slug(s)",
            path.display(),
            catalog.menus.len(),
            catalog.translations.len(),
            catalog.slugs.len()
        );
        Ok(catalog)
    }

    pub fn menus(&self) -> &[MenuRecord] {
        &self.menus
    }

    /// Looks a menu up by system name, ignoring case.
    pub fn menu(&self, system_name: &str) -> Result<&MenuRecord, MenuError> {
        self.menus
            .iter()
            .find(|m| m.system_name.eq_ignore_ascii_case(system_name))
            .ok_or_else(|| MenuError::MenuNotFound(system_name.to_string()))
    }

    pub fn menu_by_id(&self, id: i32) -> Option<&MenuRecord> {
        self.menus.iter().find(|m| m.id == id)
    }

    pub fn item_by_id(&self, id: i32) -> Option<&MenuItemRecord> {
        self.menus.iter().find_map(|m| m.item(id))
    }

    /// Direct children of an item, in display order.
    pub fn item_children(&self, id: i32) -> Option<Vec<&MenuItemRecord>> {
        self.menus
            .iter()
            .find(|m| m.item(id).is_some())
            .map(|m| m.children_of(Some(id)))
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    pub fn slugs(&self) -> &SlugTable {
        &self.slugs
    }

    pub fn into_parts(self) -> (Vec<MenuRecord>, TranslationTable, SlugTable) {
        (self.menus, self.translations, self.slugs)
    }
}
