use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initializes a stderr tracing subscriber for hosts and tests.
///
/// Filter defaults to `info`, overridable via `RUST_LOG`. Calling more than
/// once is a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
