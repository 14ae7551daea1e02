//! Configuration management for ipexpand.
//!
//! Provides XDG-compliant settings storage. Settings only supply defaults;
//! command-line flags always take precedence.

mod settings;

pub use settings::{AppSettings, Paths, DEFAULT_OUTPUT_FILE};
