//! Operator logging.
//!
//! Diagnostics go to stderr through `tracing`, keeping stdout for reports.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "gouda=info";
const DEBUG_LOG_FILTER: &str = "gouda=debug";

/// Installs the global stderr subscriber.
///
/// `RUST_LOG` overrides the default filter unless `debug` is set. Calling
/// this more than once keeps the first subscriber.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new(DEBUG_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
    if installed.is_err() {
        tracing::debug!("logging already initialised");
    }
}
