use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn default_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("debug,tower_http=debug,sqlx=info")
        } else {
            EnvFilter::new("info,tower_http=info,axum=info")
        }
    })
}

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info,axum=info`, or `debug` when `debug` is set
/// - Writes to stdout to improve visibility in environments that hide stderr
pub fn init_logging_default(debug: bool) {
    let _ = fmt()
        .with_env_filter(default_filter(debug))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
pub fn init_logging_json(debug: bool) {
    let _ = fmt()
        .with_env_filter(default_filter(debug))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Picks the output format from `server.log_json`.
pub fn init_logging(debug: bool, json: bool) {
    if json {
        init_logging_json(debug);
    } else {
        init_logging_default(debug);
    }
}
