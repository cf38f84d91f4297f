use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::LogArgs;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(log: &LogArgs) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log.filter))?;
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer()).try_init()?;
    }

    Ok(())
}
