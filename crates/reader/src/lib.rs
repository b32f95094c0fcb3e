//! Symbol speech and focus recovery for a screen reader.
//!
//! [`ReaderBuilder`] collects speech rules, then [`ReaderBuilder::build`]
//! produces a [`Reader`] that answers lookups and tracks focus history.

#![forbid(unsafe_code)]

pub mod config;
pub mod session;

pub use config::ReaderConfig;
pub use nav_history::{HistoryTracker, Recovery, SelectionHost, TargetKey};
pub use session::{Reader, ReaderBuilder};
pub use speech_rules::{DynamicCstr, FunctionDescriptor, SymbolDescriptor};

/// Install the `env_logger` logger, honouring `RUST_LOG`.
///
/// Calling this again after a logger is installed does nothing.
pub fn init_logging() {
    if env_logger::builder().try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
