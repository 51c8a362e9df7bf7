//! Logger initialization for widget hosts.
//!
//! Centralizes `env_logger` setup so every host wires diagnostics the same
//! way. Intentionally small; nothing here goes beyond the standard `log`
//! facade.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "vivid_widget=debug", "vivid_widget=trace,vivid_studio=debug").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in the host's `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        // Explicit filter wins over RUST_LOG.
        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                // Quiet default: lifecycle transitions log at debug, render
                // passes at trace, so info keeps embedding hosts clean.
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style).init();

        log::debug!("logging initialized");
    });
}
