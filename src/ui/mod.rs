//! User interface layer.
//!
//! Transforms session state into terminal output through the abstract
//! [`Renderer`] interface.
//!
//! ```text
//! SessionState → compute_viewmodel → ViewModel → render_viewmodel → Renderer
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable state
//! - [`renderer`]: Renderer trait and the drawing routine
//! - [`helpers`]: Highlight segment splitting
//! - [`theme`]: Display attributes and themes

pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel, resting_row, Renderer};
pub use theme::{DisplayAttribute, Theme};
pub use viewmodel::{RowView, Segment, ViewModel};
