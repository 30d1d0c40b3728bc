//! Diagnostic logging
//!
//! Game output goes to stdout (or the terminal UI); tracing goes to stderr and
//! is quiet by default.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Run `f` with warnings going to stderr before `init` has been called.
///
/// Config loading happens before the log level is known; this keeps its
/// fallback warnings visible.
pub fn with_startup_logging<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .compact()
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` if set. Otherwise the level is `warn`, or `debug` for this
/// crate when `debug` is true (which also logs the selected target word).
///
/// # Example
/// ```bash
/// RUST_LOG=wordle_game=debug wordle simple
/// ```
pub fn init(debug: bool) {
    let fallback = if debug { "warn,wordle_game=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
