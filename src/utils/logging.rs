//! Logging initialization
//!
//! Respects the RUST_LOG environment variable; an explicit filter applies
//! only when RUST_LOG is unset, and the default level is "info". Logs go
//! to stderr; stdout is reserved for the fixed diagnostic line.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber
///
/// # Arguments
/// * `filter` - Optional log filter (e.g., "debug", "sync_shim=debug").
///              RUST_LOG takes precedence when set.
pub fn init_logging(filter: Option<&str>) {
    let mut env_filter = EnvFilter::from_default_env();

    if std::env::var("RUST_LOG").is_err() {
        env_filter = match filter {
            Some(f) => EnvFilter::new(f),
            None => EnvFilter::new("info"),
        };
    }

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(std::env::var("NO_COLOR").is_err()),
        )
        .with(env_filter)
        .init();
}
