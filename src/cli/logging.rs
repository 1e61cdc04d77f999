//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-module log levels
pub const LOG_ENV: &str = "WORD_GRAPH_LOG";

/// Install the global subscriber
///
/// Reads `WORD_GRAPH_LOG` (e.g. `WORD_GRAPH_LOG=word_graph::query=debug`)
/// and falls back to `default_directive` when it is unset or invalid.
/// Logs go to stderr so they never mix with the interactive prompt.
/// Calling this more than once is a no-op.
pub fn init_tracing(default_directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
