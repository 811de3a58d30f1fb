//! Per-render state shared by every converter appending into one tree

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::domain::{MenuItem, TreeNode};
use crate::error::LinkError;

/// Case-insensitive set of provider names. Keeps the first spelling seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSet {
    names: IndexMap<String, String>,
}

impl ProviderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the provider was not yet present.
    pub fn insert(&mut self, provider: &str) -> bool {
        let key = provider.to_lowercase();
        if self.names.contains_key(&key) {
            return false;
        }
        self.names.insert(key, provider.to_string());
        true
    }

    pub fn contains(&self, provider: &str) -> bool {
        self.names.contains_key(&provider.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.values().map(String::as_str)
    }
}

impl Serialize for ProviderSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// A node whose link could not be generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkFailure {
    pub entity_id: i32,
    pub provider: String,
    pub message: String,
    #[serde(skip)]
    pub error: LinkError,
}

/// Explicit render context passed through every `append` call.
#[derive(Debug, Clone, Default)]
pub struct MenuRenderContext {
    pub is_menu_editing: bool,
    pub providers: ProviderSet,
    pub link_failures: Vec<LinkFailure>,
}

impl MenuRenderContext {
    pub fn new(is_menu_editing: bool) -> Self {
        Self {
            is_menu_editing,
            ..Self::default()
        }
    }

    pub fn record_link_failure(&mut self, entity_id: i32, provider: &str, error: LinkError) {
        self.link_failures.push(LinkFailure {
            entity_id,
            provider: provider.to_string(),
            message: error.to_string(),
            error,
        });
    }

    pub fn into_tree(self, root: TreeNode<MenuItem>) -> MenuTree {
        MenuTree {
            root,
            providers: self.providers,
            link_failures: self.link_failures,
        }
    }
}

/// Finished render pass
#[derive(Debug, Clone, Serialize)]
pub struct MenuTree {
    pub root: TreeNode<MenuItem>,
    pub providers: ProviderSet,
    pub link_failures: Vec<LinkFailure>,
}

impl MenuTree {
    /// Whether any node in the tree came from `provider`.
    pub fn contains_provider(&self, provider: &str) -> bool {
        self.providers.contains(provider)
    }
}
