//! Services used while rendering menus

pub mod builder;
pub mod context;
pub mod converter;
pub mod icons;
pub mod links;
pub mod localization;

pub use builder::MenuBuilder;
pub use context::{LinkFailure, MenuRenderContext, MenuTree, ProviderSet};
pub use converter::MenuItemConverter;
pub use icons::{IconCatalog, IconDescription, IconExplorer};
pub use links::{LinkResolver, Slug, SlugTable};
pub use localization::{
    LocalizedField, LocalizedValue, Localizer, Translation, TranslationTable,
    WorkingLanguageLocalizer,
};
