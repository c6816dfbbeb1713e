use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over the configured filter. Returns `false` when a global
/// subscriber was already installed, which makes repeated calls harmless.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let mut bad_filter = None;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|e| {
            bad_filter = Some(e.to_string());
            EnvFilter::new("info")
        });

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok();

    if let Some(error) = bad_filter {
        warn!("Ignoring log filter {:?}: {}", config.filter, error);
    }
    installed
}
