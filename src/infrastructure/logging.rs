use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

const FALLBACK_LEVEL: &str = "warn";

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// command output.
///
/// `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(&config.level));
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);

    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(stderr.json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(stderr.pretty().with_target(true))
            .init(),
    }

    tracing::debug!(level = %config.level, "Logging initialized");
}

/// Filter for a configured level; an unparsable level falls back to `warn`
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}
