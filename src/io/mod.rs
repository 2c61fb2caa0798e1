//! Input/output around the pure generation core

/// Command-line parsing and invocation runner
pub mod cli;
/// Default parameters and fixed thresholds
pub mod configuration;
/// Error types shared by the crate
pub mod error;
/// PNG export and the save directory
pub mod export;
/// Progress display for batch saving
pub mod progress;
