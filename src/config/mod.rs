//! Configuration file handling for Dreamz
//!
//! `.dreamz/dreamz.yaml` holds the bundle limits and the channel directory.
//! Every field has a default, so an empty file is a valid configuration.

pub mod utils;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Channel;
use crate::domain::channel::default_channels;
use crate::error::{Result, config::read_failed, config_invalid, config_parse_failed};
use crate::selection::Limits;

fn default_name() -> String {
    "dreamz".to_string()
}

/// Workspace configuration (dreamz.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamzConfig {
    /// Workspace (server) name
    #[serde(default = "default_name")]
    pub name: String,

    /// Selection thresholds
    #[serde(default)]
    pub limits: Limits,

    /// Channels bundles can target
    #[serde(default = "default_channels")]
    pub channels: Vec<Channel>,
}

impl Default for DreamzConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            limits: Limits::default(),
            channels: default_channels(),
        }
    }
}

impl DreamzConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document, treat it as all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        let config = Self::from_yaml(&content).map_err(|e| match e {
            crate::error::DreamzError::ConfigParseFailed { reason, .. } => {
                config_parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })?;
        debug!(path = %path.display(), channels = config.channels.len(), "loaded configuration");
        Ok(config)
    }

    /// Serialize configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(utils::add_blank_lines_between_entries(
            &yaml, "channels", "- id:",
        ))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_videos == 0 {
            return Err(config_invalid("limits.max_videos must be at least 1"));
        }
        if self.limits.max_total_bytes == 0 {
            return Err(config_invalid("limits.max_total_bytes must be at least 1"));
        }

        let mut seen = HashSet::new();
        for channel in &self.channels {
            if channel.id.trim().is_empty() {
                return Err(config_invalid("channel ids cannot be empty"));
            }
            if !seen.insert(channel.id.as_str()) {
                return Err(config_invalid(format!(
                    "duplicate channel id '{}'",
                    channel.id
                )));
            }
        }

        Ok(())
    }

    /// Find a channel by id
    pub fn find_channel(&self, id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }
}
