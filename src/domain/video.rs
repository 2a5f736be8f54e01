//! Video catalog item

use serde::{Deserialize, Serialize};

/// A selectable video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    /// Unique identifier within the catalog
    pub id: String,

    /// Display name (usually the file name)
    pub name: String,

    /// Size in bytes
    pub size: u64,

    /// Duration in seconds (0 when unknown)
    #[serde(default)]
    pub duration: u64,

    /// Marked for inclusion in the next bundle
    #[serde(default)]
    pub selected: bool,
}

impl VideoItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, size: u64, duration: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size,
            duration,
            selected: false,
        }
    }

    /// Copy of this item as stored inside a bundle, with the selection flag cleared
    pub fn snapshot(&self) -> Self {
        Self {
            selected: false,
            ..self.clone()
        }
    }
}
