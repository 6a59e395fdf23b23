//! Tracing setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing from the `COURIER_LOG` environment variable.
///
/// Defaults to `warn`. Output goes to stderr so stdout stays parseable.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("COURIER_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
