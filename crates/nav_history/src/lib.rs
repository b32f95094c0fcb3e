//! Navigation history for selection recovery.
//!
//! A [`HistoryTracker`] remembers recently focused targets, newest first, and
//! uses a [`SelectionHost`] to decide which of them are still usable when the
//! current target disappears.

#![forbid(unsafe_code)]

pub mod host;
pub mod tracker;

pub use host::{FnHost, SelectionHost, TargetKey};
pub use tracker::{HistoryTracker, MAX_HISTORY_LEN, Recovery};
