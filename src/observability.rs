//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

const FALLBACK_FILTER: &str = "info";

/// Build the filter: `RUST_LOG` wins, then the configured directive, then `info`
pub fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    resolve_filter(rust_log.as_deref(), &logging.filter)
}

fn resolve_filter(rust_log: Option<&str>, configured: &str) -> EnvFilter {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(err) => eprintln!("ignoring invalid RUST_LOG {directives:?}: {err}"),
        }
    }

    EnvFilter::try_new(configured).unwrap_or_else(|err| {
        eprintln!("invalid log filter {configured:?}: {err}; falling back to {FALLBACK_FILTER}");
        EnvFilter::new(FALLBACK_FILTER)
    })
}

/// Install the global fmt subscriber. Later calls are no-ops.
pub fn init(logging: &LoggingConfig) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_ansi(logging.ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = %logging.filter, "Tracing initialized");
    }
}
