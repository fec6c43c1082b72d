//! Centralized logging initialization
//!
//! Diagnostics flow through `tracing` to stderr; stdout is reserved for
//! the progress report and the final summary.
//!
//! Environment variables:
//! - `RUST_LOG`: standard Rust log filter (e.g.
//!   `RUST_LOG=plugmill_pipeline=debug plugmill`)

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; the default filter level is `info`.
pub fn initialize() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
