/// Logging setup: `tracing` events to stderr, filtered by `--debug` or `RUST_LOG`.
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the level is `debug` with
/// `--debug` and `warn` without. Calling this twice is harmless.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
