use std::sync::Arc;

use axum::extract::FromRef;
use menu_core::services::{
    IconCatalog, IconExplorer, LinkResolver, MenuItemConverter, TranslationTable,
    WorkingLanguageLocalizer,
};
use menu_core::{Language, MenuCatalog};
use menu_shared::config::{AppConfig, LanguageSettings};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<MenuCatalog>,
    pub translations: Arc<TranslationTable>,
    pub links: Arc<LinkResolver>,
    pub icons: Arc<dyn IconExplorer>,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: MenuCatalog) -> Self {
        let links = LinkResolver::new(
            &config.menu.base_path,
            &config.menu.routes,
            Arc::new(catalog.slugs().clone()),
        );

        Self {
            translations: Arc::new(catalog.translations().clone()),
            links: Arc::new(links),
            icons: Arc::new(IconCatalog::with_defaults()),
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    /// Converter for one request. Unknown or missing cultures fall back to
    /// the default language.
    pub fn converter_for(&self, culture: Option<&str>) -> MenuItemConverter {
        let localization = &self.config.localization;
        let default = localization.default_language();
        let working = culture
            .and_then(|c| localization.language(c))
            .cloned()
            .unwrap_or_else(|| default.clone());

        let localizer = WorkingLanguageLocalizer::new(
            self.translations.clone(),
            to_language(&working),
            to_language(&default),
        );
        MenuItemConverter::new(Arc::new(localizer), self.icons.clone(), self.links.clone())
    }
}

fn to_language(settings: &LanguageSettings) -> Language {
    Language::new(&settings.culture, settings.rtl)
}

impl FromRef<AppState> for Arc<MenuCatalog> {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub const CATALOG: &str = r#"{
        "menus": [
            {
                "id": 1,
                "system_name": "Main",
                "title": "Main menu",
                "items": [
                    {"id": 10, "menu_id": 1, "provider_name": "route", "title": "Home",
                     "display_order": 1, "icon": "home",
                     "link": {"kind": "route", "name": "homepage"}},
                    {"id": 11, "menu_id": 1, "provider_name": "catalog", "title": "Phones",
                     "display_order": 2, "begin_group": true, "short_description": "Catalog",
                     "link": {"kind": "entity", "entity": "category", "id": 3}},
                    {"id": 12, "menu_id": 1, "provider_name": "Catalog", "title": "Cases",
                     "parent_item_id": 11,
                     "link": {"kind": "entity", "entity": "category", "id": 99}}
                ]
            },
            {"id": 2, "system_name": "Drafts", "title": "Drafts", "published": false, "items": []}
        ],
        "translations": [
            {"entity_id": 10, "culture": "ar", "field": "title", "value": "الرئيسية"}
        ],
        "slugs": [{"entity": "category", "id": 3, "slug": "phones"}]
    }"#;

    pub fn state_with_upload_dir(upload_dir: &std::path::Path) -> AppState {
        let mut config = AppConfig::default();
        config.menu.upload_dir = upload_dir.to_path_buf();
        AppState::new(config, MenuCatalog::from_json_str(CATALOG).unwrap())
    }

    pub fn state() -> AppState {
        state_with_upload_dir(&std::env::temp_dir().join("menu-api-tests"))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::state;

    #[test]
    fn test_converter_for_falls_back_to_default_language() {
        let state = state();
        let record = state.catalog.item_by_id(10).unwrap();

        let arabic = state.converter_for(Some("AR")).convert_to_menu_item(record, false);
        assert_eq!(arabic.text, "الرئيسية");
        assert!(arabic.rtl);

        let unknown = state.converter_for(Some("fr")).convert_to_menu_item(record, false);
        assert_eq!(unknown.text, "Home");
        assert!(!unknown.rtl);
        assert_eq!(unknown.icon.as_deref(), Some("fas fa-home"));
    }
}
