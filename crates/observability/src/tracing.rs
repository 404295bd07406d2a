//! Subscriber wiring.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::SystemTime;

/// Directives used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "info";

/// Install the global subscriber: JSON lines, wall-clock timestamps,
/// `RUST_LOG`-style filtering.
///
/// Tests and binaries may all call this; once a subscriber is installed,
/// later calls do nothing.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_timer(SystemTime)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}
