//! Diagnostic logging setup for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "STRATEGIST_LOG";

const DEFAULT_FILTER: &str = "off";

/// Install a stderr subscriber filtered by `STRATEGIST_LOG` (silent by default).
///
/// Calling it again is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
