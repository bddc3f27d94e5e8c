//! The prompt's dispatch loop.
//!
//! [`Controller`] wires a [`SessionState`] to a [`Renderer`] and a
//! [`KeySource`]:
//!
//! ```text
//! acquire terminal → clear → render
//!        ↓
//! next_key → Event::from_key → handle_event → render (if needed)
//!        ↑                                       │
//!        └───────────────────────────────────────┘
//!                 until Confirm / Cancel / Exit
//! ```
//!
//! The loop is single-threaded and synchronous; the only blocking point is
//! [`KeySource::next_key`]. The terminal is held by a [`TerminalGuard`] for
//! the whole loop, so raw mode is left on every path out of [`Controller::run`].

use super::modes::{Outcome, INTERRUPT_EXIT_CODE};
use crate::app::{handle_event, Action, Event, SessionState};
use crate::domain::error::Result;
use crate::infrastructure::keys::KeySource;
use crate::infrastructure::terminal::TerminalGuard;
use crate::ui::renderer::{render, resting_row, Renderer};
use crate::ui::theme::Theme;

/// Drives one prompt session to completion.
pub struct Controller<R: Renderer, K: KeySource> {
    state: SessionState,
    theme: Theme,
    renderer: R,
    keys: K,
}

impl<R: Renderer, K: KeySource> Controller<R, K> {
    /// Wraps a fresh session. Nothing is drawn until [`run`](Self::run).
    pub const fn new(state: SessionState, theme: Theme, renderer: R, keys: K) -> Self {
        Self {
            state,
            theme,
            renderer,
            keys,
        }
    }

    /// Session state, resolved once [`run`](Self::run) has returned.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Runs the prompt until it resolves.
    ///
    /// On confirm or cancel the cursor is parked below the candidate list and
    /// the terminal is restored before returning. Under
    /// [`InterruptPolicy::Exit`](crate::app::InterruptPolicy::Exit) an
    /// interrupt restores the terminal and terminates the process with
    /// [`INTERRUPT_EXIT_CODE`]; this function does not return in that case.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Io`](crate::PromptError::Io) if the renderer or
    /// key source fails. The terminal is restored before the error surfaces.
    pub fn run(&mut self) -> Result<Outcome> {
        let _span = tracing::debug_span!(
            "prompt_session",
            candidates = self.state.candidates.len(),
            capacity = self.state.capacity
        )
        .entered();

        let mut guard = TerminalGuard::acquire(&mut self.renderer)?;
        guard.clear_screen()?;
        render(&self.state, &self.theme, &mut *guard)?;

        loop {
            let key = self.keys.next_key()?;
            let Some(event) = Event::from_key(&key) else {
                tracing::trace!(?key, "key dropped");
                continue;
            };

            let (should_render, actions) = handle_event(&mut self.state, &event)?;

            // the handler emits at most one resolving action
            if let Some(action) = actions.into_iter().next() {
                let outcome = match action {
                    Action::Confirm(candidate) => Outcome::Confirmed(candidate),
                    Action::Cancel => Outcome::Cancelled,
                    Action::Exit => {
                        tracing::debug!(code = INTERRUPT_EXIT_CODE, "interrupted, exiting");
                        if let Err(e) = guard.move_cursor_to(1, resting_row(self.state.capacity)) {
                            tracing::debug!(error = %e, "failed to park cursor before exit");
                        }
                        drop(guard);
                        std::process::exit(INTERRUPT_EXIT_CODE);
                    }
                };

                guard.move_cursor_to(1, resting_row(self.state.capacity))?;
                guard.release()?;
                tracing::debug!(?outcome, "prompt resolved");
                return Ok(outcome);
            }

            if should_render {
                render(&self.state, &self.theme, &mut *guard)?;
            }
        }
    }
}
