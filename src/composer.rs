//! One bundle wizard session: catalog, bundles and the current step

use serde::{Deserialize, Serialize};

use crate::catalog::VideoCatalog;
use crate::domain::{Bundle, BundleId, Tier};
use crate::error::Result;
use crate::selection::{Limits, SelectionSummary};
use crate::store::BundleStore;
use crate::wizard::WizardStep;

/// Composer state, persisted between invocations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composer {
    #[serde(default)]
    pub step: WizardStep,

    #[serde(default)]
    pub catalog: VideoCatalog,

    #[serde(flatten)]
    pub store: BundleStore,
}

impl Composer {
    pub fn new(catalog: VideoCatalog) -> Self {
        Self {
            step: WizardStep::default(),
            catalog,
            store: BundleStore::new(),
        }
    }

    /// Current selection measured against `limits`
    pub fn summary(&self, limits: Limits) -> SelectionSummary {
        SelectionSummary::measure(self.catalog.selected(), limits)
    }

    /// Create a bundle from the current selection
    pub fn create_bundle(&mut self, name: &str, limits: Limits) -> Result<BundleId> {
        let id = self
            .store
            .create_bundle(name, &mut self.catalog, limits)?
            .id;
        self.step = self.step.after_bundle_created();
        Ok(id)
    }

    pub fn remove_bundle(&mut self, id: BundleId) -> Option<Bundle> {
        self.store.remove_bundle(id)
    }

    pub fn set_tiers(&mut self, id: BundleId, tiers: impl IntoIterator<Item = Tier>) -> bool {
        self.store.set_tiers(id, tiers)
    }

    pub fn set_channels<S: Into<String>>(
        &mut self,
        id: BundleId,
        channels: impl IntoIterator<Item = S>,
    ) -> bool {
        self.store.set_channels(id, channels)
    }

    /// Advance the wizard to the assign step
    pub fn next_step(&mut self) -> Result<WizardStep> {
        self.step = self.step.advance(self.store.len())?;
        Ok(self.step)
    }

    /// Return the wizard to the upload step
    pub fn previous_step(&mut self) -> WizardStep {
        self.step = self.step.back();
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;

    #[test]
    fn test_full_wizard_round() {
        let mut composer = Composer::new(demo_catalog());
        assert!(composer.next_step().is_err());

        composer.catalog.set_selected(&["1", "2", "3"], true).unwrap();
        assert_eq!(composer.summary(Limits::default()).count, 3);

        let id = composer.create_bundle("Part 1", Limits::default()).unwrap();
        assert_eq!(composer.step, WizardStep::Bundle);
        assert_eq!(composer.summary(Limits::default()).count, 0);

        assert_eq!(composer.next_step().unwrap(), WizardStep::Assign);
        assert!(composer.set_tiers(id, [Tier::Basic, Tier::Premium]));
        assert!(composer.set_channels(id, ["basic-1"]));

        assert_eq!(composer.previous_step(), WizardStep::Upload);
        let bundle = composer.store.get(id).unwrap();
        assert_eq!(bundle.videos().len(), 3);
        assert_eq!(bundle.tiers.len(), 2);
    }

    #[test]
    fn test_rejected_create_keeps_step() {
        let mut composer = Composer::new(demo_catalog());
        assert!(composer.create_bundle("Empty", Limits::default()).is_err());
        assert_eq!(composer.step, WizardStep::Upload);
    }

    #[test]
    fn test_removing_last_bundle_keeps_step() {
        let mut composer = Composer::new(demo_catalog());
        composer.catalog.toggle("1").unwrap();
        let id = composer.create_bundle("Only", Limits::default()).unwrap();
        composer.next_step().unwrap();

        assert!(composer.remove_bundle(id).is_some());
        assert_eq!(composer.step, WizardStep::Assign);
        assert!(composer.store.is_empty());
    }

    #[test]
    fn test_state_yaml_roundtrip_keeps_id_counter() {
        let mut composer = Composer::new(demo_catalog());
        composer.catalog.toggle("1").unwrap();
        let first = composer.create_bundle("A", Limits::default()).unwrap();
        composer.remove_bundle(first);

        let yaml = serde_yaml::to_string(&composer).unwrap();
        let mut restored: Composer = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored, composer);

        restored.catalog.toggle("2").unwrap();
        let second = restored.create_bundle("B", Limits::default()).unwrap();
        assert_ne!(first, second);
    }
}
