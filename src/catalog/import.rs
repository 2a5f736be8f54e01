//! Import video files from a directory into the catalog

use std::path::Path;

use blake3::Hasher;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::VideoCatalog;
use crate::domain::VideoItem;
use crate::error::{Result, import_failed};

/// File extensions accepted as videos
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "mov", "webm"];

/// Length of the hex id derived for imported files
const ID_LEN: usize = 12;

/// What an import changed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Ids of newly added items
    pub added: Vec<String>,
    /// Relative paths and sizes of files over the upload limit
    pub too_large: Vec<(String, u64)>,
    /// Files already present in the catalog
    pub duplicates: usize,
}

/// Whether a path has one of the accepted video extensions (case-insensitive)
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Stable catalog id for a file, derived from its path relative to the import root
pub fn video_id(relative_path: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(relative_path.replace('\\', "/").as_bytes());
    let hex = hasher.finalize().to_hex();
    hex.as_str()[..ID_LEN].to_string()
}

/// Walk `root` recursively and add every video file within `max_upload_bytes`
///
/// Files are visited in path order so repeated imports produce the same
/// catalog order. Durations are not probed and are recorded as 0.
pub fn import_dir(
    catalog: &mut VideoCatalog,
    root: &Path,
    max_upload_bytes: u64,
) -> Result<ImportReport> {
    if !root.is_dir() {
        return Err(import_failed(
            root.display().to_string(),
            "not a directory",
        ));
    }

    let mut report = ImportReport::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_video_file(entry.path()) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        let size = entry.metadata()?.len();

        if size > max_upload_bytes {
            warn!(path = %relative, size, max_upload_bytes, "skipping video over upload limit");
            report.too_large.push((relative, size));
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let id = video_id(&relative);
        if catalog.push(VideoItem::new(id.clone(), name, size, 0)) {
            debug!(%id, path = %relative, size, "imported video");
            report.added.push(id);
        } else {
            report.duplicates += 1;
        }
    }

    Ok(report)
}
