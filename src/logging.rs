//! Developer diagnostics through `tracing`.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: diagnostics for debugging Ready itself,
//!   written to stderr and filtered by `RUST_LOG`.
//! - **User output ([`crate::ui`])**: task progress and verdicts on stdout,
//!   unaffected by `RUST_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. `debug` (the `--debug` flag)
/// overrides it with `ready=debug`. Calling this more than once is harmless.
///
/// # Example
/// ```bash
/// RUST_LOG=ready=debug ready --all
/// ```
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ready=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
