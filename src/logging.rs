// src/logging.rs
use log::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` overrides `level` when set.
///
/// `log` records from this crate and `jversion_core` are forwarded through
/// the subscriber's log bridge.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_ascii_lowercase()));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
