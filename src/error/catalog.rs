//! Video catalog errors

use super::DreamzError;

/// Creates a video not found error
pub fn video_not_found(id: impl Into<String>) -> DreamzError {
    DreamzError::VideoNotFound { id: id.into() }
}

/// Creates an import failed error
pub fn import_failed(path: impl Into<String>, reason: impl Into<String>) -> DreamzError {
    DreamzError::ImportFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
