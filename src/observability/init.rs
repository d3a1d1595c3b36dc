//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global subscriber that writes formatted events to stderr.
///
/// Idempotent: if a global subscriber is already set (by an earlier call or by the
/// host application), this call does nothing.
///
/// # Example
///
/// ```
/// use dramlog::observability::init_tracing;
/// use dramlog::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));

    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
