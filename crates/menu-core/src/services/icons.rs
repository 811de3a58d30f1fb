// ============================================================================
// Menu Core - Icon Explorer
// File: crates/menu-core/src/services/icons.rs
// Description: Maps icon names and styles to CSS classes
// ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Known icon with the style variants it ships with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescription {
    pub name: String,
    #[serde(default)]
    pub is_brand: bool,
    #[serde(default)]
    pub has_regular: bool,
    #[serde(skip)]
    unknown: bool,
}

impl IconDescription {
    pub fn solid(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_brand: false,
            has_regular: false,
            unknown: false,
        }
    }

    pub fn with_regular(name: &str) -> Self {
        Self {
            has_regular: true,
            ..Self::solid(name)
        }
    }

    pub fn brand(name: &str) -> Self {
        Self {
            is_brand: true,
            ..Self::solid(name)
        }
    }

    /// Placeholder for a name the explorer does not know.
    pub fn unknown(name: &str) -> Self {
        Self {
            unknown: true,
            ..Self::solid(name)
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.unknown
    }

    /// CSS class for the given style. Unknown icons yield an empty class.
    pub fn css_class(&self, style: Option<&str>) -> String {
        if self.unknown {
            return String::new();
        }

        let prefix = if self.is_brand {
            "fab"
        } else {
            match style.map(str::trim) {
                Some(s) if s.eq_ignore_ascii_case("regular") && self.has_regular => "far",
                _ => "fas",
            }
        };

        format!("{} fa-{}", prefix, self.name)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait IconExplorer: Send + Sync {
    fn icon_by_name(&self, name: &str) -> IconDescription;
}

/// In-memory icon explorer
#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    icons: HashMap<String, IconDescription>,
}

impl IconCatalog {
    pub fn new(icons: impl IntoIterator<Item = IconDescription>) -> Self {
        Self {
            icons: icons
                .into_iter()
                .map(|icon| (icon.name.to_ascii_lowercase(), icon))
                .collect(),
        }
    }

    /// Icons commonly used in storefront navigation.
    pub fn with_defaults() -> Self {
        Self::new([
            IconDescription::solid("home"),
            IconDescription::solid("shopping-cart"),
            IconDescription::solid("tags"),
            IconDescription::solid("search"),
            IconDescription::solid("info-circle"),
            IconDescription::with_regular("star"),
            IconDescription::with_regular("heart"),
            IconDescription::with_regular("envelope"),
            IconDescription::with_regular("user"),
            IconDescription::brand("facebook"),
            IconDescription::brand("instagram"),
            IconDescription::brand("github"),
        ])
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl IconExplorer for IconCatalog {
    fn icon_by_name(&self, name: &str) -> IconDescription {
        self.icons
            .get(&name.trim().to_ascii_lowercase())
            .cloned()
            .unwrap_or_else(|| IconDescription::unknown(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class_by_style() {
        let icons = IconCatalog::with_defaults();

        assert_eq!(icons.icon_by_name("home").css_class(None), "fas fa-home");
        assert_eq!(icons.icon_by_name("home").css_class(Some("regular")), "fas fa-home");
        assert_eq!(icons.icon_by_name("Star").css_class(Some("regular")), "far fa-star");
        assert_eq!(icons.icon_by_name("github").css_class(Some("regular")), "fab fa-github");
    }

    #[test]
    fn test_unknown_icon_degrades_to_empty_class() {
        let icons = IconCatalog::with_defaults();
        let icon = icons.icon_by_name("does-not-exist");

        assert!(icon.is_unknown());
        assert_eq!(icon.css_class(Some("solid")), "");
    }
}
