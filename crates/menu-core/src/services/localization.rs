// ============================================================================
// Menu Core - Localization
// File: crates/menu-core/src/services/localization.rs
// Description: Resolves localized record fields for the working language
// ============================================================================

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Language, MenuItemRecord};

/// Localizable fields of a menu item record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalizedField {
    Title,
    ShortDescription,
}

/// A field value together with the language it was resolved in
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedValue {
    pub value: String,
    pub current_language: Option<Language>,
}

impl LocalizedValue {
    pub fn new(value: impl Into<String>, language: Option<Language>) -> Self {
        Self {
            value: value.into(),
            current_language: language,
        }
    }

    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Right-to-left only when the resolved language says so.
    pub fn is_rtl(&self) -> bool {
        self.current_language.as_ref().map_or(false, |lang| lang.rtl)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Localizer: Send + Sync {
    fn localize(&self, record: &MenuItemRecord, field: LocalizedField) -> LocalizedValue;
}

/// One translated value as stored in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub entity_id: i32,
    pub culture: String,
    pub field: LocalizedField,
    pub value: String,
}

/// Translations keyed by entity, culture, and field
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    values: HashMap<(i32, String, LocalizedField), String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity_id: i32, culture: &str, field: LocalizedField, value: &str) {
        self.values.insert(
            (entity_id, culture.to_ascii_lowercase(), field),
            value.to_string(),
        );
    }

    pub fn get(&self, entity_id: i32, culture: &str, field: LocalizedField) -> Option<&str> {
        self.values
            .get(&(entity_id, culture.to_ascii_lowercase(), field))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<Translation> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = Translation>>(iter: I) -> Self {
        let mut table = TranslationTable::new();
        for t in iter {
            table.insert(t.entity_id, &t.culture, t.field, &t.value);
        }
        table
    }
}

/// Looks up translations for the working language, falling back to the
/// record's own value in the default language.
#[derive(Debug, Clone)]
pub struct WorkingLanguageLocalizer {
    table: Arc<TranslationTable>,
    working: Language,
    default: Language,
}

impl WorkingLanguageLocalizer {
    pub fn new(table: Arc<TranslationTable>, working: Language, default: Language) -> Self {
        Self {
            table,
            working,
            default,
        }
    }

    pub fn working_language(&self) -> &Language {
        &self.working
    }
}

impl Localizer for WorkingLanguageLocalizer {
    fn localize(&self, record: &MenuItemRecord, field: LocalizedField) -> LocalizedValue {
        if let Some(translated) = self
            .table
            .get(record.id, &self.working.culture, field)
            .filter(|v| !v.trim().is_empty())
        {
            return LocalizedValue::new(translated, Some(self.working.clone()));
        }

        let raw = match field {
            LocalizedField::Title => record.title.as_str(),
            LocalizedField::ShortDescription => record.short_description.as_deref().unwrap_or(""),
        };
        LocalizedValue::new(raw, Some(self.default.clone()))
    }
}
