//! Structured logging setup with tracing and tracing-subscriber.

use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise this crate logs at `default_level`.
/// Only the first call in a process has any effect.
///
/// ```no_run
/// health_completion::telemetry::init("debug");
/// tracing::info!("ready");
/// ```
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("health_completion={default_level}")));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init();
    });
}
