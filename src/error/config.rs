//! Configuration errors

use super::DreamzError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DreamzError {
    DreamzError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config invalid error
pub fn invalid(message: impl Into<String>) -> DreamzError {
    DreamzError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DreamzError {
    DreamzError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
