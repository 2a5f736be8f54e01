//! Error types and handling for Dreamz
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle store and wizard errors
//! - [`catalog`]: Video catalog and import errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`workspace`]: Workspace errors

pub mod bundle;
pub mod catalog;
pub mod config;
pub mod fs;
pub mod workspace;

pub use bundle::{
    empty_name as empty_bundle_name, ids_exhausted, invalid_selection,
    not_found as bundle_not_found, step_blocked, unknown_channel,
};
pub use catalog::{import_failed, video_not_found};
pub use config::{invalid as config_invalid, parse_failed as config_parse_failed};
pub use fs::{read_failed as file_read_failed, write_failed as file_write_failed};
pub use workspace::{already_exists as workspace_exists, not_found as workspace_not_found};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Dreamz operations
#[derive(Error, Diagnostic, Debug)]
pub enum DreamzError {
    // Workspace errors
    #[error("Workspace not found at: {path}")]
    #[diagnostic(
        code(dreamz::workspace::not_found),
        help("Run 'dreamz init' to create a workspace")
    )]
    WorkspaceNotFound { path: String },

    #[error("Workspace already exists at: {path}")]
    #[diagnostic(
        code(dreamz::workspace::exists),
        help("Pass --force to reset the existing workspace")
    )]
    WorkspaceExists { path: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(dreamz::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(dreamz::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(dreamz::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Catalog errors
    #[error("Video '{id}' not found in catalog")]
    #[diagnostic(
        code(dreamz::catalog::video_not_found),
        help("Run 'dreamz catalog' to see available video ids")
    )]
    VideoNotFound { id: String },

    #[error("Failed to import videos from {path}: {reason}")]
    #[diagnostic(code(dreamz::catalog::import_failed))]
    ImportFailed { path: String, reason: String },

    // Bundle errors
    #[error("Bundle name cannot be empty")]
    #[diagnostic(
        code(dreamz::bundle::empty_name),
        help("Give the bundle a name, e.g. dreamz create \"Part 1\"")
    )]
    EmptyBundleName,

    #[error("Invalid selection: {reason}")]
    #[diagnostic(
        code(dreamz::bundle::invalid_selection),
        help("Run 'dreamz status' to check the selection against the limits")
    )]
    InvalidSelection { reason: String },

    #[error("Bundle '{id}' not found")]
    #[diagnostic(
        code(dreamz::bundle::not_found),
        help("Run 'dreamz list' to see bundle ids")
    )]
    BundleNotFound { id: String },

    #[error("No bundle ids left after {last}")]
    #[diagnostic(
        code(dreamz::bundle::ids_exhausted),
        help("Check the bundle ids in .dreamz/state.yaml")
    )]
    BundleIdsExhausted { last: u64 },

    #[error("Unknown channel: {channel}")]
    #[diagnostic(
        code(dreamz::bundle::unknown_channel),
        help("Run 'dreamz channel-list' to see configured channels")
    )]
    UnknownChannel { channel: String },

    #[error("Invalid tier: {tier}")]
    #[diagnostic(
        code(dreamz::bundle::invalid_tier),
        help("Valid tiers: basic, medium, premium")
    )]
    InvalidTier { tier: String },

    #[error("Cannot move to the {step} step: {reason}")]
    #[diagnostic(code(dreamz::wizard::step_blocked))]
    StepBlocked { step: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(dreamz::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(dreamz::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(dreamz::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DreamzError {
    fn from(err: std::io::Error) -> Self {
        DreamzError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DreamzError {
    fn from(err: serde_yaml::Error) -> Self {
        DreamzError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DreamzError {
    fn from(err: serde_json::Error) -> Self {
        DreamzError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for DreamzError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        DreamzError::ImportFailed {
            path,
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for DreamzError {
    fn from(err: inquire::InquireError) -> Self {
        DreamzError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DreamzError>;
