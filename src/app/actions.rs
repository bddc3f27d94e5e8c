//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) mutates session state and
//! returns a list of actions; the [`Controller`](crate::app::Controller)
//! executes them. Keeping terminal teardown and process exit out of the
//! handler lets the state machine be tested without a live terminal.

use crate::domain::Candidate;

/// Commands executed by the controller after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Restore the terminal and deliver the confirmed candidate.
    Confirm(Candidate),

    /// Restore the terminal and resolve the prompt as cancelled.
    Cancel,

    /// Restore the terminal and terminate the process.
    ///
    /// Emitted for an interrupt under
    /// [`InterruptPolicy::Exit`](crate::app::InterruptPolicy::Exit).
    Exit,
}
