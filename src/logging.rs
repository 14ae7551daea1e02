//! Diagnostic logging.
//!
//! Log output goes to stderr so it never mixes with results on stdout.
//! The filter is read from `IPEXPAND_LOG` using `tracing_subscriber`'s
//! directive syntax, e.g. `IPEXPAND_LOG=ipexpand=trace`.

use anyhow::{anyhow, Context};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "IPEXPAND_LOG";

/// Install the global subscriber.
///
/// Without `IPEXPAND_LOG`, only warnings are shown, or debug events for
/// this crate when `verbose` is set.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid {} value '{}'", LOG_ENV, directives))?,
        Err(_) => EnvFilter::new(default_directive(verbose)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,ipexpand=debug"
    } else {
        "warn"
    }
}
