//! OData path segments
//!
//! Paths like `MenuItems(5)/Children` or `Menus('3')/Items/$count` are split
//! into typed segments. There is no entity model here: every named segment
//! after the entity set is treated as a navigation property.

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ODataSegment {
    EntitySet(String),
    /// Raw key text, quotes included.
    Key(String),
    Navigation(String),
    /// `$ref`, `$count`, `$value` and friends.
    Meta(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ODataPath {
    segments: Vec<ODataSegment>,
}

impl ODataPath {
    pub fn new(segments: Vec<ODataSegment>) -> Self {
        Self { segments }
    }

    pub fn parse(path: &str) -> Result<Self, ApiError> {
        let mut segments = Vec::new();

        for part in path.split('/').map(str::trim).filter(|p| !p.is_empty()) {
            if part.starts_with('$') {
                segments.push(ODataSegment::Meta(part.to_string()));
                continue;
            }

            let (name, key) = match part.find('(') {
                Some(open) if part.ends_with(')') => {
                    (&part[..open], Some(&part[open + 1..part.len() - 1]))
                }
                Some(_) => return Err(invalid_segment(part)),
                None if part.contains(')') => return Err(invalid_segment(part)),
                None => (part, None),
            };
            if name.is_empty() {
                return Err(invalid_segment(part));
            }

            segments.push(if segments.is_empty() {
                ODataSegment::EntitySet(name.to_string())
            } else {
                ODataSegment::Navigation(name.to_string())
            });
            if let Some(key) = key {
                segments.push(ODataSegment::Key(key.trim().to_string()));
            }
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[ODataSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn entity_set(&self) -> Option<&str> {
        match self.segments.first() {
            Some(ODataSegment::EntitySet(name)) => Some(name),
            _ => None,
        }
    }

    /// Integer key at `index`, with surrounding single quotes removed.
    pub fn normalized_key(&self, index: usize) -> Option<i32> {
        let ODataSegment::Key(raw) = self.segments.get(index)? else {
            return None;
        };
        if raw.is_empty() {
            return None;
        }

        let raw = if raw.starts_with('\'') {
            raw.get(1..raw.len().checked_sub(1)?)?
        } else {
            raw.as_str()
        };
        raw.parse().ok()
    }

    /// Navigation property name at `index`.
    pub fn navigation(&self, index: usize) -> Option<&str> {
        match self.segments.get(index)? {
            ODataSegment::Navigation(name) => Some(name),
            _ => None,
        }
    }
}

fn invalid_segment(part: &str) -> ApiError {
    ApiError::BadRequest(format!("Invalid OData path segment: {}", part))
}
