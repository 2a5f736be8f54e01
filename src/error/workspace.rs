//! Workspace errors

use super::DreamzError;

/// Creates a workspace not found error
pub fn not_found(path: impl Into<String>) -> DreamzError {
    DreamzError::WorkspaceNotFound { path: path.into() }
}

/// Creates a workspace already exists error
pub fn already_exists(path: impl Into<String>) -> DreamzError {
    DreamzError::WorkspaceExists { path: path.into() }
}
