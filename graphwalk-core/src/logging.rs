//! Structured logging using **tracing**.
//!
//! Traversals emit `debug!` summaries and `trace!` per visited node. Nothing
//! is printed unless a subscriber is installed, so library callers that never
//! call [`init_structured_logging`] pay only the cost of a disabled callsite.

use tracing::{error, info, warn};

/// Initializes the global tracing subscriber.
///
/// Call once at the start of the process. Emits JSON to stderr so stdout
/// stays reserved for query results.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=graphwalk_core=trace`)
pub fn init_structured_logging() {
    // try_init: a second call (e.g. from tests) must not panic
    let _ = tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Logs a warning event.
pub fn log_warn(message: &str) {
    warn!(detail = %message);
}

/// Logs an info event.
pub fn log_info(message: &str) {
    info!(detail = %message);
}

/// Logs an error event.
pub fn log_error(message: &str) {
    error!(detail = %message);
}

/// Logs a custom event with a specific event name.
///
/// Maps to a log level based on the event name.
pub fn log_event(event: &str, detail: &str) {
    match event.to_uppercase().as_str() {
        "ERROR" => error!(event = %event, detail = %detail),
        "WARN" | "WARNING" => warn!(event = %event, detail = %detail),
        _ => info!(event = %event, detail = %detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_structured_logging();
        init_structured_logging();
        log_event("warn", "second init ignored");
        log_info("still alive");
    }
}
