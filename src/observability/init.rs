//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, setting up the pipeline from
//! `tracing` macros to the rotating JSON trace file.

use super::file_writer::FileWriter;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "autoprompt-trace.json";

/// Initializes the tracing subscriber with a JSON file writer.
///
/// # Filter Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`
/// 3. Neither set: tracing stays disabled and no file is created
///
/// # File Location
///
/// Traces are written as JSON lines to
/// `<data dir>/autoprompt/autoprompt-trace.json` (see
/// [`get_data_dir`]), rotated at 10 MB with 3 backups. Nothing is ever
/// written to the terminal, which the prompt holds in raw mode.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if directory creation fails (observability is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust
/// use autoprompt::observability::init_tracing;
/// use autoprompt::Config;
///
/// // no trace level and no RUST_LOG: a no-op
/// init_tracing(&Config::default());
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| config.trace_level.as_deref().map(EnvFilter::new));
    let Some(filter) = filter else {
        return;
    };

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(data_dir.join(TRACE_FILE_NAME));
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .try_init();
}
