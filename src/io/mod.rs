//! Input/output operations and error handling
//!
//! Everything outside the pure engine lives here: boundary validation
//! errors, the direction-log format, the command-line driver, and progress
//! display for batches of simulated games.

/// Command-line interface and game drivers
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types for boundary validation and file handling
pub mod error;
/// Progress display for game batches
pub mod progress;
/// Direction-log parsing and loading
pub mod replay;
