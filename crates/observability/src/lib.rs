//! Logging setup shared by every binary and test harness.

/// Log filter and output format.
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LogConfig, LogFormat};

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&LogConfig::from_env());
}

/// Initialize process-wide logging from an explicit configuration.
pub fn init_with(config: &LogConfig) {
    tracing::init_with(config);
}
