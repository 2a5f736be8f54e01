//! Bundle store
//!
//! Bundles are kept in creation order. Creation and removal are the only
//! operations that change membership; after creation only the tier and
//! channel tags of a bundle can change.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::VideoCatalog;
use crate::domain::{Bundle, BundleId, Tier};
use crate::error::{Result, empty_bundle_name, ids_exhausted, invalid_selection};
use crate::selection::{Limits, SelectionSummary};

fn first_id() -> u64 {
    1
}

/// Ordered collection of created bundles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleStore {
    #[serde(default)]
    bundles: Vec<Bundle>,

    /// Next id to hand out; only ever grows
    #[serde(default = "first_id")]
    next_id: u64,
}

impl Default for BundleStore {
    fn default() -> Self {
        Self {
            bundles: Vec::new(),
            next_id: first_id(),
        }
    }
}

impl BundleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    pub fn get(&self, id: BundleId) -> Option<&Bundle> {
        self.bundles.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: BundleId) -> Option<&mut Bundle> {
        self.bundles.iter_mut().find(|b| b.id == id)
    }

    /// Allocate a fresh id, skipping past any id already in the store
    ///
    /// Fails without touching the counter when the id space is used up.
    fn allocate_id(&mut self) -> Result<BundleId> {
        let id = match self.bundles.iter().map(|b| b.id.0).max() {
            Some(last) => last
                .checked_add(1)
                .ok_or_else(|| ids_exhausted(last))?
                .max(self.next_id),
            None => self.next_id.max(first_id()),
        };
        self.next_id = id.checked_add(1).ok_or_else(|| ids_exhausted(id))?;
        Ok(BundleId(id))
    }

    /// Turn the catalog's current selection into a new bundle
    ///
    /// Rejected without touching the store or the catalog when the name is
    /// blank or the selection is outside `limits`. On success the selected
    /// items are copied into the bundle and every selection flag in the
    /// catalog is cleared.
    pub fn create_bundle(
        &mut self,
        name: &str,
        catalog: &mut VideoCatalog,
        limits: Limits,
    ) -> Result<&Bundle> {
        let name = name.trim();
        if name.is_empty() {
            return Err(empty_bundle_name());
        }

        let summary = SelectionSummary::measure(catalog.selected(), limits);
        let verdict = summary.verdict();
        if !verdict.is_valid() {
            return Err(invalid_selection(verdict.to_string()));
        }

        let id = self.allocate_id()?;
        let bundle = Bundle::new(id, name, catalog.selected());
        catalog.clear_selection();

        info!(
            %id,
            name,
            videos = bundle.videos().len(),
            total_size = bundle.total_size(),
            "created bundle"
        );

        self.bundles.push(bundle);
        let index = self.bundles.len() - 1;
        Ok(&self.bundles[index])
    }

    /// Remove a bundle; a missing id is a no-op and returns `None`
    pub fn remove_bundle(&mut self, id: BundleId) -> Option<Bundle> {
        let pos = self.bundles.iter().position(|b| b.id == id)?;
        let removed = self.bundles.remove(pos);
        info!(%id, name = %removed.name, "removed bundle");
        Some(removed)
    }

    /// Replace the tier tags of a bundle; returns false when the bundle is absent
    pub fn set_tiers(&mut self, id: BundleId, tiers: impl IntoIterator<Item = Tier>) -> bool {
        match self.get_mut(id) {
            Some(bundle) => {
                bundle.tiers = tiers.into_iter().collect();
                true
            }
            None => false,
        }
    }

    /// Replace the channel tags of a bundle; returns false when the bundle is absent
    pub fn set_channels<S: Into<String>>(
        &mut self,
        id: BundleId,
        channels: impl IntoIterator<Item = S>,
    ) -> bool {
        match self.get_mut(id) {
            Some(bundle) => {
                bundle.channels = channels.into_iter().map(Into::into).collect();
                true
            }
            None => false,
        }
    }
}
