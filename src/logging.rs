//! Tracing setup
//!
//! Library code only emits `tracing` events; the binary installs a
//! subscriber. `RUST_LOG` takes precedence over the `-v` count.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_TEST_LOGGING: Once = Once::new();

/// Level selected by the number of `-v` flags
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber for the CLI, writing to stderr
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose).to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Logging for tests, enabled by `level` or `RUST_LOG`
///
/// ```bash
/// RUST_LOG=assetry=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_TEST_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
