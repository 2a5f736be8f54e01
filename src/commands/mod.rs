//! Command implementations for Dreamz CLI

pub mod assign;
pub mod catalog;
pub mod completions;
pub mod create;
pub mod init;
pub mod list;
pub mod plan;
pub mod remove;
pub mod select;
pub mod show;
pub mod status;
pub mod version;
pub mod wizard;
