//! Bundle store and wizard errors

use super::DreamzError;

/// Creates a bundle not found error
pub fn not_found(id: impl ToString) -> DreamzError {
    DreamzError::BundleNotFound { id: id.to_string() }
}

/// Creates an empty bundle name error
pub fn empty_name() -> DreamzError {
    DreamzError::EmptyBundleName
}

/// Creates an invalid selection error
pub fn invalid_selection(reason: impl Into<String>) -> DreamzError {
    DreamzError::InvalidSelection {
        reason: reason.into(),
    }
}

/// Creates an error for a store whose id counter cannot grow
pub fn ids_exhausted(last: u64) -> DreamzError {
    DreamzError::BundleIdsExhausted { last }
}

/// Creates an unknown channel error
pub fn unknown_channel(channel: impl Into<String>) -> DreamzError {
    DreamzError::UnknownChannel {
        channel: channel.into(),
    }
}

/// Creates a blocked wizard transition error
pub fn step_blocked(step: impl Into<String>, reason: impl Into<String>) -> DreamzError {
    DreamzError::StepBlocked {
        step: step.into(),
        reason: reason.into(),
    }
}
