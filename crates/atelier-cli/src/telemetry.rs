//! Telemetry and tracing configuration.

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info,atelier_core=debug,atelier_engine=debug";

/// Initializes the tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when present, with a sensible default
/// otherwise.
pub(crate) fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("invalid tracing filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}
