//! Structured logging initialisation for asymsig binaries.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the application, which calls [`init`] or [`init_json`] once at startup.
//! Output goes to stderr so command output on stdout stays machine-readable.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter from `RUST_LOG`, falling back to `default_level`.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install a human-readable subscriber.
///
/// # Errors
/// Fails if a global subscriber has already been installed.
///
/// # Example
/// ```no_run
/// use asymsig_core::logging;
///
/// logging::init("info").expect("logging already initialised");
/// tracing::info!("provider ready");
/// ```
pub fn init(default_level: &str) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true),
        )
        .try_init()?;
    Ok(())
}

/// Install a JSON subscriber for log aggregation.
///
/// # Errors
/// Fails if a global subscriber has already been installed.
pub fn init_json(default_level: &str) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true),
        )
        .try_init()?;
    Ok(())
}

/// Install the subscriber described by a [`LoggingConfig`].
pub fn init_from_config(config: &LoggingConfig) -> anyhow::Result<()> {
    match config.format {
        LogFormat::Text => init(&config.level),
        LogFormat::Json => init_json(&config.level),
    }
}
