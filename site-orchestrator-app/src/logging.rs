//! Logging initialization.
//!
//! The core logs through the `log` facade; the subscriber installed here
//! bridges those records into `tracing` and writes them to stderr.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Fallback directive when the configured one cannot be parsed
const FALLBACK_LEVEL: &str = "info";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides `config.level`. Returns `false` when a subscriber was
/// already installed, in which case the existing one is kept.
pub fn init(config: &LoggingConfig) -> bool {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => filter_for_level(&config.level),
    };

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi),
        )
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        match rejected {
            Some(e) => tracing::warn!(
                "Invalid log level '{}' ({e}), falling back to '{FALLBACK_LEVEL}'",
                config.level
            ),
            None => tracing::debug!("Logging initialized (level: {})", config.level),
        }
    }
    installed
}

/// Parse a configured directive, returning the parse error alongside the
/// fallback filter when it is invalid
fn filter_for_level(level: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LEVEL), Some(e)),
    }
}
