//! Logging integration for formkit.
//!
//! Provides a helper for configuring `tracing`-based logging. Library code
//! emits `debug!` events on store mutations and `warn!` events when
//! generation-stream messages are skipped; this module wires those to a
//! subscriber.

/// Sets up the global tracing subscriber.
///
/// `level` is an `EnvFilter` directive string (e.g. "debug", "info",
/// "formkit_store=debug"). With `pretty` a human-readable format is used;
/// otherwise a structured JSON format suitable for production.
///
/// Safe to call more than once; later calls are ignored.
pub fn setup_logging(level: &str, pretty: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if pretty {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}
