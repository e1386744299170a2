//! Diagnostic logging setup.
//!
//! Logs go to standard error through `tracing-subscriber`, never to the
//! result stream. The filter comes from `TELLM_LOG`, then `RUST_LOG`, then
//! a default of `warn` (`tellm=info` with `--verbose`).

use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::LOG_ENV_VAR;

/// Installs the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| default_filter(verbose));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,tellm=info")
    } else {
        EnvFilter::new("warn")
    }
}
