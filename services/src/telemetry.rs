use crate::config::Config;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,roster_services=debug,roster_business=debug"))
}

/// Installs the global subscriber. Also bridges `log` records from the business crate.
pub fn init_tracing(config: &Config) {
    if config.is_local() {
        // Local development: Pretty printing
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer())
            .init();
    } else {
        // Deployed: one JSON object per line, Stackdriver field names
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_stackdriver::layer())
            .init();
    }
}
