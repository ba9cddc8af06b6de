//! Log output for hosts embedding the backend.
//!
//! The crate logs through the `log` facade. `init` installs a
//! `tracing-subscriber` formatter that also picks up `log` records, filtered
//! by `RUST_LOG` and defaulting to `info`.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. Later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init().is_err() {
        log::debug!("Logging already initialized");
    }
}
