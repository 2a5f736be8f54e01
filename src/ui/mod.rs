//! Terminal presentation layer
//!
//! This module handles:
//! - Formatting sizes, durations and gauges
//! - Printing the catalog, selection status, bundles, channels and plan

pub mod display;
pub mod format;

pub use format::{format_duration, format_file_size, plural};
