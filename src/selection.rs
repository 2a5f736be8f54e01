//! Selection validation against the bundle limits
//!
//! The verdict is recomputed from scratch on every call; nothing here holds state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::VideoItem;

/// Maximum number of videos in one bundle
pub const DEFAULT_MAX_VIDEOS: usize = 10;

/// Maximum combined size of one bundle (500 MiB)
pub const DEFAULT_MAX_TOTAL_BYTES: u64 = 500 * 1024 * 1024;

/// Maximum size of a single imported file (500 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;

/// Thresholds a selection must stay within
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_videos: usize,
    pub max_total_bytes: u64,
    pub max_upload_bytes: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_videos: DEFAULT_MAX_VIDEOS,
            max_total_bytes: DEFAULT_MAX_TOTAL_BYTES,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Outcome of checking a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionVerdict {
    Valid,
    Empty,
    TooManyVideos { max: usize },
    TooLarge { max_bytes: u64 },
}

impl SelectionVerdict {
    pub fn is_valid(self) -> bool {
        self == SelectionVerdict::Valid
    }
}

impl fmt::Display for SelectionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionVerdict::Valid => write!(f, "ready to bundle"),
            SelectionVerdict::Empty => write!(f, "no videos selected"),
            SelectionVerdict::TooManyVideos { max } => write!(f, "too many videos (max {max})"),
            SelectionVerdict::TooLarge { max_bytes } => write!(
                f,
                "file size exceeds {} limit",
                crate::ui::format_file_size(*max_bytes)
            ),
        }
    }
}

/// Count and size of a selection, measured against the limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub count: usize,
    pub total_size: u64,
    pub limits: Limits,
}

impl SelectionSummary {
    pub fn measure<'a>(selection: impl IntoIterator<Item = &'a VideoItem>, limits: Limits) -> Self {
        let (count, total_size) = selection
            .into_iter()
            .fold((0usize, 0u64), |(n, bytes), v| (n + 1, bytes.saturating_add(v.size)));
        Self {
            count,
            total_size,
            limits,
        }
    }

    /// Count is checked before size, so an oversized selection that also has
    /// too many videos reports the count.
    pub fn verdict(&self) -> SelectionVerdict {
        if self.count > self.limits.max_videos {
            SelectionVerdict::TooManyVideos {
                max: self.limits.max_videos,
            }
        } else if self.total_size > self.limits.max_total_bytes {
            SelectionVerdict::TooLarge {
                max_bytes: self.limits.max_total_bytes,
            }
        } else if self.count == 0 {
            SelectionVerdict::Empty
        } else {
            SelectionVerdict::Valid
        }
    }

    pub fn is_valid(&self) -> bool {
        self.verdict().is_valid()
    }

    /// Fraction of the size limit in use, for the size gauge
    #[allow(clippy::cast_precision_loss)]
    pub fn size_ratio(&self) -> f64 {
        if self.limits.max_total_bytes == 0 {
            return 1.0;
        }
        self.total_size as f64 / self.limits.max_total_bytes as f64
    }
}

/// Whether the given selection may be turned into a bundle
pub fn is_valid_selection<'a>(
    selection: impl IntoIterator<Item = &'a VideoItem>,
    limits: Limits,
) -> bool {
    SelectionSummary::measure(selection, limits).is_valid()
}
