//! Shared startup for the diagnostic binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rtk_core::ChainConfig;

/// Initialize tracing with `default_filter` unless `RUST_LOG` overrides it.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load `.env` (if present) and the chain configuration.
pub fn load_config() -> anyhow::Result<ChainConfig> {
    dotenvy::dotenv().ok();
    Ok(ChainConfig::from_env()?)
}

/// Parse a required numeric positional argument.
pub fn arg_u64(position: usize, name: &str, usage: &str) -> anyhow::Result<u64> {
    let raw = std::env::args()
        .nth(position)
        .ok_or_else(|| anyhow::anyhow!("missing {name} argument\nusage: {usage}"))?;
    raw.parse()
        .map_err(|_| anyhow::anyhow!("{name} must be a number, got {raw:?}"))
}
