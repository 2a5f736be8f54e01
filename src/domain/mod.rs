//! Domain models for Dreamz
//!
//! This module contains pure domain objects representing the bundle composer's
//! core entities. They carry no I/O and enforce the per-record invariants.

pub mod bundle;
pub mod channel;
pub mod video;

pub use bundle::{Bundle, BundleId, Tier};
pub use channel::Channel;
pub use video::VideoItem;
