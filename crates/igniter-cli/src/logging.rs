//! Logging setup for the CLI

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber. `RUST_LOG` wins over `level` when set.
pub fn init(level: &str) {
    let filter = format!("igniter={level},igniter_cli={level}");
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
