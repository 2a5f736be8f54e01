//! Bundle wizard steps
//!
//! `Upload` and `Bundle` share one screen: videos are picked and bundles
//! created there. `Assign` is where tiers and channels are set. Moving forward
//! needs at least one bundle; moving back is always allowed.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, step_blocked};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Upload,
    Bundle,
    Assign,
}

impl WizardStep {
    /// Heading shown for the step
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Upload | WizardStep::Bundle => "Step 1: Upload & Bundle",
            WizardStep::Assign => "Step 2: Assign Distribution",
        }
    }

    /// Move to `Assign`; blocked while no bundle exists
    ///
    /// Advancing from `Assign` keeps the wizard where it is.
    pub fn advance(self, bundle_count: usize) -> Result<Self> {
        match self {
            WizardStep::Upload | WizardStep::Bundle if bundle_count == 0 => Err(step_blocked(
                WizardStep::Assign.to_string(),
                "create at least one bundle first",
            )),
            WizardStep::Upload | WizardStep::Bundle | WizardStep::Assign => {
                debug!(from = %self, to = %WizardStep::Assign, "wizard advanced");
                Ok(WizardStep::Assign)
            }
        }
    }

    /// Go back to the upload screen
    pub fn back(self) -> Self {
        debug!(from = %self, to = %WizardStep::Upload, "wizard went back");
        WizardStep::Upload
    }

    /// Step after a bundle was created while on this step
    pub fn after_bundle_created(self) -> Self {
        match self {
            WizardStep::Upload => WizardStep::Bundle,
            other => other,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::Upload => "upload",
            WizardStep::Bundle => "bundle",
            WizardStep::Assign => "assign",
        };
        f.write_str(name)
    }
}
