//! Distribution plan
//!
//! Groups bundles by the channels they target and flags assignments that look
//! wrong. The plan is only computed and shown; nothing is posted.

use std::fmt;

use serde::Serialize;

use crate::domain::{Bundle, BundleId, Channel, Tier};

/// A bundle as it appears under a channel in the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedBundle {
    pub id: BundleId,
    pub name: String,
    pub videos: usize,
    pub total_size: u64,
}

/// Bundles headed to one channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelPlan {
    pub channel: String,
    pub name: String,
    pub tier: Tier,
    pub bundles: Vec<PlannedBundle>,
}

/// Something about a bundle's assignment worth a second look
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    NoTiers {
        bundle: BundleId,
    },
    NoChannels {
        bundle: BundleId,
    },
    UnknownChannel {
        bundle: BundleId,
        channel: String,
    },
    TierMismatch {
        bundle: BundleId,
        channel: String,
        channel_tier: Tier,
    },
}

impl PlanWarning {
    /// Whether this warning keeps the plan from being ready
    pub fn is_blocking(&self) -> bool {
        !matches!(self, PlanWarning::TierMismatch { .. })
    }
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::NoTiers { bundle } => write!(f, "bundle {bundle} has no tiers"),
            PlanWarning::NoChannels { bundle } => write!(f, "bundle {bundle} has no channels"),
            PlanWarning::UnknownChannel { bundle, channel } => {
                write!(f, "bundle {bundle} targets unknown channel '{channel}'")
            }
            PlanWarning::TierMismatch {
                bundle,
                channel,
                channel_tier,
            } => write!(
                f,
                "bundle {bundle} targets {channel_tier} channel '{channel}' without the {channel_tier} tier"
            ),
        }
    }
}

/// Where every bundle would be posted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionPlan {
    pub bundle_count: usize,
    pub channels: Vec<ChannelPlan>,
    pub warnings: Vec<PlanWarning>,
}

impl DistributionPlan {
    /// At least one bundle and every bundle has tiers and known channels
    pub fn is_ready(&self) -> bool {
        self.bundle_count > 0 && !self.warnings.iter().any(PlanWarning::is_blocking)
    }

    /// Channels that receive at least one bundle
    pub fn active_channels(&self) -> impl Iterator<Item = &ChannelPlan> {
        self.channels.iter().filter(|c| !c.bundles.is_empty())
    }
}

/// Warnings for a single bundle against the channel directory
pub fn bundle_warnings(bundle: &Bundle, channels: &[Channel]) -> Vec<PlanWarning> {
    let mut warnings = Vec::new();

    if bundle.tiers.is_empty() {
        warnings.push(PlanWarning::NoTiers { bundle: bundle.id });
    }
    if bundle.channels.is_empty() {
        warnings.push(PlanWarning::NoChannels { bundle: bundle.id });
    }

    for channel_id in &bundle.channels {
        match channels.iter().find(|c| &c.id == channel_id) {
            None => warnings.push(PlanWarning::UnknownChannel {
                bundle: bundle.id,
                channel: channel_id.clone(),
            }),
            Some(channel) if !bundle.tiers.is_empty() && !bundle.has_tier(channel.tier) => {
                warnings.push(PlanWarning::TierMismatch {
                    bundle: bundle.id,
                    channel: channel.id.clone(),
                    channel_tier: channel.tier,
                });
            }
            Some(_) => {}
        }
    }

    warnings
}

/// Build the plan for `bundles` over the channel directory, in directory order
pub fn build_plan(bundles: &[Bundle], channels: &[Channel]) -> DistributionPlan {
    let channel_plans = channels
        .iter()
        .map(|channel| ChannelPlan {
            channel: channel.id.clone(),
            name: channel.name.clone(),
            tier: channel.tier,
            bundles: bundles
                .iter()
                .filter(|b| b.channels.contains(&channel.id))
                .map(|b| PlannedBundle {
                    id: b.id,
                    name: b.name.clone(),
                    videos: b.videos().len(),
                    total_size: b.total_size(),
                })
                .collect(),
        })
        .collect();

    let warnings = bundles
        .iter()
        .flat_map(|b| bundle_warnings(b, channels))
        .collect();

    DistributionPlan {
        bundle_count: bundles.len(),
        channels: channel_plans,
        warnings,
    }
}
