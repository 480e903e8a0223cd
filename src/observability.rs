//! Diagnostic sink for binaries and tests that use this crate.
//!
//! The library itself only emits `tracing` events; nothing is printed until
//! a subscriber is installed. [`init_logging`] installs one that writes a
//! single line per event to stderr. Later calls are no-ops.

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Output encoding for diagnostic lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: &'static str,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            default_filter: "warn",
        }
    }
}

/// Install the global stderr subscriber.
///
/// Returns `false` if another global subscriber was already installed by
/// someone else.
pub fn init_logging(config: LogConfig) -> bool {
    if INITIALIZED.get().is_some() {
        return true;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter));

    let installed = match config.format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    }
    .is_ok();

    if installed {
        let _ = INITIALIZED.set(());
    }
    installed
}
