// ============================================================================
// Menu Core - Link Resolution
// File: crates/menu-core/src/services/links.rs
// Description: Turns a link target into an href, one strategy per kind
// ============================================================================

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::form_urlencoded;

use crate::domain::{EntityKind, LinkTarget, MenuItem, TreeNode};
use crate::error::LinkError;

/// Characters escaped inside a single path segment. Unreserved marks stay as is.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Slug registered for a catalog entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slug {
    pub entity: EntityKind,
    pub id: i32,
    pub slug: String,
}

#[derive(Debug, Clone, Default)]
pub struct SlugTable {
    slugs: HashMap<(EntityKind, i32), String>,
}

impl SlugTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: EntityKind, id: i32, slug: &str) {
        self.slugs.insert((entity, id), slug.trim().to_string());
    }

    pub fn get(&self, entity: EntityKind, id: i32) -> Option<&str> {
        self.slugs
            .get(&(entity, id))
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

impl FromIterator<Slug> for SlugTable {
    fn from_iter<I: IntoIterator<Item = Slug>>(iter: I) -> Self {
        let mut table = SlugTable::new();
        for s in iter {
            table.insert(s.entity, s.id, &s.slug);
        }
        table
    }
}

#[derive(Debug, Clone)]
pub struct LinkResolver {
    base_path: String,
    routes: HashMap<String, String>,
    slugs: Arc<SlugTable>,
}

impl LinkResolver {
    pub fn new(base_path: &str, routes: &HashMap<String, String>, slugs: Arc<SlugTable>) -> Self {
        let mut base_path = base_path.trim().to_string();
        if !base_path.starts_with('/') {
            base_path.insert(0, '/');
        }
        if !base_path.ends_with('/') {
            base_path.push('/');
        }

        Self {
            base_path,
            routes: routes
                .iter()
                .map(|(name, template)| (name.to_ascii_lowercase(), template.clone()))
                .collect(),
            slugs,
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolves the href for `target`. `None` means the item has no link.
    pub fn resolve(&self, target: &LinkTarget) -> Result<Option<String>, LinkError> {
        match target {
            LinkTarget::Entity { entity, id } => {
                let slug = self
                    .slugs
                    .get(*entity, *id)
                    .ok_or(LinkError::EntityNotFound {
                        entity: *entity,
                        id: *id,
                    })?;
                Ok(Some(format!("{}{}", self.base_path, slug.trim_start_matches('/'))))
            }
            LinkTarget::Route { name, values } => self.resolve_route(name, values).map(Some),
            LinkTarget::Url { url } => self.resolve_url(url).map(Some),
            LinkTarget::None => Ok(None),
        }
    }

    /// Resolves and stores the href on the node's item.
    pub fn apply(&self, node: &mut TreeNode<MenuItem>, target: &LinkTarget) -> Result<(), LinkError> {
        node.value.url = self.resolve(target)?;
        Ok(())
    }

    fn resolve_route(
        &self,
        name: &str,
        values: &BTreeMap<String, String>,
    ) -> Result<String, LinkError> {
        let template = self
            .routes
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| LinkError::UnknownRoute(name.to_string()))?;

        let mut path = String::with_capacity(template.len());
        let mut used = Vec::new();
        let mut rest = template.as_str();

        while let Some(start) = rest.find('{') {
            path.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').unwrap_or(after.len());
            let placeholder = &after[..end];

            let value = values
                .get(placeholder)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| LinkError::MissingRouteValue {
                    route: name.to_string(),
                    placeholder: placeholder.to_string(),
                })?;
            path.extend(utf8_percent_encode(value, PATH_SEGMENT));
            used.push(placeholder);

            rest = after.get(end + 1..).unwrap_or("");
        }
        path.push_str(rest);

        let query: Vec<_> = values
            .iter()
            .filter(|(key, _)| !used.contains(&key.as_str()))
            .collect();

        let mut href = format!(
            "{}{}",
            self.base_path.trim_end_matches('/'),
            if path.starts_with('/') { path } else { format!("/{}", path) }
        );
        if !query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            href.push('?');
            href.push_str(&encoded);
        }

        debug!("Resolved route {} to {}", name, href);
        Ok(href)
    }

    fn resolve_url(&self, url: &str) -> Result<String, LinkError> {
        let url = url.trim();
        if let Some(app_relative) = url.strip_prefix("~/") {
            return Ok(format!("{}{}", self.base_path, app_relative));
        }
        if url.starts_with('/') || url.starts_with('#') {
            return Ok(url.to_string());
        }
        url::Url::parse(url)
            .map(|_| url.to_string())
            .map_err(|_| LinkError::InvalidUrl(url.to_string()))
    }
}
