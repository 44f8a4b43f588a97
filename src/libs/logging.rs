//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "fitdays=info";

/// Installs the global `tracing` subscriber.
///
/// A valid `RUST_LOG` wins; otherwise `DEFAULT_FILTER` applies. Calling this
/// twice is harmless: the second installation is ignored.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt().with_env_filter(env_filter).with_target(false).with_writer(std::io::stderr).try_init();
}
