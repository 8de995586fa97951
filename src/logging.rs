//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so stdout stays reserved for
//! tree previews and reports.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::{ElvesError, Result};

/// Environment variable holding an `EnvFilter` directive, e.g. `elves=debug`
pub const LOG_ENV: &str = "ELVES_LOG";

/// Default filter directive for a `-v` count
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Build the filter; `ELVES_LOG` wins over the verbosity flag
pub fn build_env_filter(verbose: u8) -> Result<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive.trim())
            .map_err(|e| ElvesError::Logging(format!("invalid {} value: {}", LOG_ENV, e))),
        _ => Ok(EnvFilter::new(level_for_verbosity(verbose))),
    }
}

/// Initialize the global subscriber
pub fn init_logging(verbose: u8) -> Result<()> {
    let filter = build_env_filter(verbose)?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose > 1)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| ElvesError::Logging(e.to_string()))
}
