//! Application layer coordinating state, events, and actions.
//!
//! This module is the prompt's state machine. It sits between the public
//! entry points (lib.rs) and the domain/ui/infrastructure layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key → Event → Event Handler → State Mutations → Actions → Controller
//!                                     ↓
//!                               View Model → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`controller`]: Dispatch loop owning the terminal for one session
//! - [`handler`]: Event processing logic and state transitions
//! - [`modes`]: Lifecycle, outcome, and interrupt policy types
//! - [`state`]: Per-session state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use autoprompt::app::{handle_event, Event, InterruptPolicy, SessionState};
//! use autoprompt::domain::{Candidate, MatchOrder};
//!
//! let candidates = Candidate::from_texts(["run a report", "restart service"]);
//! let mut state = SessionState::new("do:", candidates, 5, MatchOrder::Original, InterruptPolicy::Cancel)?;
//! let (should_render, actions) = handle_event(&mut state, &Event::Down)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), autoprompt::PromptError>(())
//! ```

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::Controller;
pub use handler::{handle_event, Event};
pub use modes::{InterruptPolicy, Outcome, Phase, INTERRUPT_EXIT_CODE};
pub use state::SessionState;
