//! Bundle domain types
//!
//! A bundle is a named snapshot of catalog items. Its video list and total size
//! are fixed when it is created; only the distribution tags change afterwards.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::VideoItem;
use crate::error::DreamzError;

/// Subscription tier a bundle is distributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    Medium,
    Premium,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Medium, Tier::Premium];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Medium => "medium",
            Tier::Premium => "premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = DreamzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DreamzError::InvalidTier {
                tier: s.to_string(),
            })
    }
}

/// Bundle identifier, allocated by the store and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BundleId(pub u64);

impl fmt::Display for BundleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BundleId {
    type Err = DreamzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(BundleId)
            .map_err(|_| DreamzError::BundleNotFound { id: s.to_string() })
    }
}

/// A named group of videos with distribution tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: BundleId,
    pub name: String,
    videos: Vec<VideoItem>,
    total_size: u64,
    #[serde(default)]
    pub tiers: BTreeSet<Tier>,
    #[serde(default)]
    pub channels: BTreeSet<String>,
}

impl Bundle {
    /// Build a bundle from already-validated members
    ///
    /// Members are snapshotted and the total size is computed here, once.
    pub(crate) fn new<'a>(
        id: BundleId,
        name: impl Into<String>,
        members: impl IntoIterator<Item = &'a VideoItem>,
    ) -> Self {
        let videos: Vec<VideoItem> = members.into_iter().map(VideoItem::snapshot).collect();
        let total_size = videos.iter().map(|v| v.size).sum();
        Self {
            id,
            name: name.into(),
            videos,
            total_size,
            tiers: BTreeSet::new(),
            channels: BTreeSet::new(),
        }
    }

    pub fn videos(&self) -> &[VideoItem] {
        &self.videos
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn total_duration(&self) -> u64 {
        self.videos.iter().map(|v| v.duration).sum()
    }

    pub fn has_tier(&self, tier: Tier) -> bool {
        self.tiers.contains(&tier)
    }
}
