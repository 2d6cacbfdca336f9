//! `tracing` setup for the binary.
//!
//! Everything goes to stderr; stdout is reserved for the printed link list.

use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter applied when `RUST_LOG` is unset.
    pub default_filter: &'static str,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "info",
            ansi: true,
        }
    }
}

/// Installs the global subscriber. If one is already installed, by an earlier
/// call or a concurrent one, this is a no-op.
pub fn init_logging(config: LogConfig) -> anyhow::Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_filter));

    if let Err(e) = build_subscriber(env_filter, config.ansi).try_init() {
        if !tracing::dispatcher::has_been_set() {
            return Err(anyhow::anyhow!("tracing setup failed: {e}"));
        }
    }

    Ok(())
}

fn build_subscriber(filter: EnvFilter, ansi: bool) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .with_target(false),
    )
}
