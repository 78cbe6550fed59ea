//! Logging initialization with environment-based formatters
//!
//! - Production: flattened JSON events, one object per line
//! - Sandbox: human-readable ANSI output with this crate at `debug`

use crate::config::is_production;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Connection-level chatter from the HTTP stack drowns out per-series fetch logs.
const QUIET_DEPENDENCIES: &str = "hyper=warn,reqwest=warn,tower_http=info";

/// Filter used when `RUST_LOG` is unset.
pub fn default_directives(environment: &str) -> String {
    if is_production(environment) {
        format!("info,{QUIET_DEPENDENCIES}")
    } else {
        format!("info,{}=debug,{QUIET_DEPENDENCIES}", env!("CARGO_CRATE_NAME"))
    }
}

/// Install the global subscriber. `RUST_LOG` replaces the default directives.
pub fn init_logging(environment: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    if is_production(environment) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_target(true)
                    .with_writer(std::io::stdout),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_ansi(true))
            .init();
    }

    tracing::debug!(environment, "Logging initialized");
}
