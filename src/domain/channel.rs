//! Target channel directory entries

use serde::{Deserialize, Serialize};

use super::Tier;

/// A channel bundles can be posted to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel identifier (e.g. "basic-1")
    pub id: String,

    /// Display name including the leading '#'
    pub name: String,

    /// Subscription tier the channel serves
    pub tier: Tier,
}

impl Channel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tier: Tier) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier,
        }
    }

    /// Display name without the leading '#'
    pub fn bare_name(&self) -> &str {
        self.name.strip_prefix('#').unwrap_or(&self.name)
    }
}

/// The channel directory a fresh workspace starts with
pub fn default_channels() -> Vec<Channel> {
    vec![
        Channel::new("basic-1", "#basic-content", Tier::Basic),
        Channel::new("basic-2", "#basic-videos", Tier::Basic),
        Channel::new("medium-1", "#medium-content", Tier::Medium),
        Channel::new("medium-2", "#medium-videos", Tier::Medium),
        Channel::new("premium-1", "#premium-content", Tier::Premium),
        Channel::new("premium-2", "#vip-exclusive", Tier::Premium),
    ]
}
