//! Structured tracing with file-based JSON export.
//!
//! The prompt owns the terminal while it runs, so diagnostics never go to
//! stdout or stderr. Instead spans and events are serialized as JSON lines
//! into a size-rotated file for offline debugging.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt::layer().json() → FileWriter → JSON file
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option (or `--trace-level` on the command line)
//! 3. Neither: tracing is disabled
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
pub mod init;

pub use init::{init_tracing, TRACE_FILE_NAME};
