//! Infrastructure layer for terminal, keyboard, and filesystem interactions.
//!
//! Everything that touches the outside world lives here, behind the
//! [`Renderer`](crate::ui::Renderer) and [`KeySource`] seams, so the
//! application layer can be driven entirely in memory.
//!
//! # Modules
//!
//! - [`keys`]: Key decoding and key sources (crossterm, scripted)
//! - [`paths`]: Data directory and tilde expansion
//! - [`terminal`]: Crossterm renderer and the raw-mode guard

pub mod keys;
pub mod paths;
pub mod terminal;

pub use keys::{CrosstermKeySource, KeyEvent, KeyName, KeySource, ScriptedKeys};
pub use paths::{expand_tilde, get_data_dir};
pub use terminal::{CrosstermRenderer, TerminalGuard};
