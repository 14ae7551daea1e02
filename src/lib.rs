//! # ipexpand - IPv4 Range Expansion
//!
//! ipexpand turns compact IPv4 range notation into the full list of
//! addresses it covers, either for a single expression or for a file with
//! one expression per line.
//!
//! ## Notation
//!
//! - **Short form**: `192.168.1.1-20` expands the last octet from 1 to 20
//! - **Full form**: `192.168.1.1-192.168.1.255`, both ends in the same /24
//!
//! ## Example Usage
//!
//! ```rust
//! use ipexpand::expand;
//!
//! let addrs = expand("10.0.0.1-3").unwrap();
//! assert_eq!(addrs.len(), 3);
//! assert_eq!(addrs[2].to_string(), "10.0.0.3");
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Address validation and range parsing
//! - [`expand`] - Expansion of a single range expression
//! - [`batch`] - Line-by-line processing of range files
//! - [`cli`] - Argument parsing and dispatch
//! - [`output`] - Plain, JSON, and CSV rendering
//! - [`config`] - Optional settings file
//! - [`error`] - Error types

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod expand;
pub mod logging;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use batch::{process_file, BatchReport, LineError};
pub use error::{BatchError, ErrorKind, ExpandError};
pub use expand::{expand, expand_to_string};
pub use types::{is_valid_ipv4, Ipv4Range, RangeSpec};
