use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, TelemetryConfig};

/// Initialize structured logging.
///
/// `RUST_LOG` takes precedence over the configured filter. Output is either
/// compact human-readable lines or one JSON object per event.
pub fn init(config: &TelemetryConfig) {
    subscriber(config).init();
}

/// Build the subscriber without installing it.
pub fn subscriber(config: &TelemetryConfig) -> Box<dyn Subscriber + Send + Sync> {
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let registry = tracing_subscriber::registry().with(filter_layer);

    match config.format {
        LogFormat::Compact => Box::new(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .compact(),
            ),
        ),
        LogFormat::Json => Box::new(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true),
            ),
        ),
    }
}
