//! Video catalog
//!
//! The catalog is the list of videos a bundle can be built from. Each item
//! carries its own `selected` flag; the selection is simply the items with
//! that flag set, in catalog order.

pub mod demo;
pub mod import;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::VideoItem;
use crate::error::{Result, video_not_found};

pub use demo::demo_catalog;
pub use import::import_dir;

/// Ordered collection of catalog items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoCatalog {
    items: Vec<VideoItem>,
}

impl VideoCatalog {
    pub fn new(items: Vec<VideoItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[VideoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&VideoItem> {
        self.items.iter().find(|v| v.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Append an item unless one with the same id exists; returns whether it was added
    pub fn push(&mut self, item: VideoItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Currently selected items, in catalog order
    pub fn selected(&self) -> impl Iterator<Item = &VideoItem> {
        self.items.iter().filter(|v| v.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// Flip the selection flag of one item and return its new state
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| video_not_found(id))?;
        item.selected = !item.selected;
        debug!(id, selected = item.selected, "toggled video selection");
        Ok(item.selected)
    }

    /// Set the selection flag on every listed item
    ///
    /// All ids are checked before anything changes, so an unknown id leaves
    /// the catalog untouched.
    pub fn set_selected<S: AsRef<str>>(&mut self, ids: &[S], selected: bool) -> Result<()> {
        if let Some(missing) = ids.iter().find(|id| !self.contains(id.as_ref())) {
            return Err(video_not_found(missing.as_ref()));
        }
        for item in &mut self.items {
            if ids.iter().any(|id| id.as_ref() == item.id) {
                item.selected = selected;
            }
        }
        debug!(count = ids.len(), selected, "updated video selection");
        Ok(())
    }

    pub fn select_all(&mut self) {
        for item in &mut self.items {
            item.selected = true;
        }
    }

    pub fn clear_selection(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }
}
