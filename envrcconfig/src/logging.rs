//! Logging setup
//!
//! Logs go to stderr so generated files written to stdout stay clean.
//! `RUST_LOG` takes precedence over the `-logging` flag when it is set.

use std::env;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init(level: &str) {
    INIT.call_once(|| {
        let filter = build_filter(level);
        let result = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init();
        if let Err(err) = result {
            eprintln!("Failed to install log subscriber: {}", err);
        }
    });
}

pub(crate) fn build_filter(level: &str) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    let level = parse_level(level);
    EnvFilter::new(format!("envrcconfig={}", level))
}

/// Parse a level name case-insensitively, falling back to INFO.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}
