//! Event handling and state transition logic.
//!
//! This module turns decoded key events into state transitions. Each call to
//! [`handle_event`] performs one complete, synchronous transition and reports
//! whether the screen needs a redraw plus any side effects for the controller.
//!
//! # Transition Table
//!
//! | Event | Effect |
//! |---|---|
//! | `Char(c)` | append to query, re-match, reset window, redraw |
//! | `Backspace` | drop last char, re-match, reset window, redraw (no-op on empty query) |
//! | `Up` / `Down` | move selection, redraw if the window changed |
//! | `Tab` / `Left` / `Right` | ignored |
//! | `Interrupt` | resolve per [`InterruptPolicy`] |
//! | `Confirm` | resolve with the selected candidate (no-op if none) |
//!
//! # Example
//!
//! ```
//! use autoprompt::app::{handle_event, Event, InterruptPolicy, SessionState};
//! use autoprompt::domain::{Candidate, MatchOrder};
//!
//! let candidates = Candidate::from_texts(["sell some widgets", "run a report"]);
//! let mut state = SessionState::new("?", candidates, 5, MatchOrder::Original, InterruptPolicy::Cancel)?;
//!
//! let (should_render, actions) = handle_event(&mut state, &Event::Char('r'))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), autoprompt::PromptError>(())
//! ```

use super::modes::{InterruptPolicy, Outcome, Phase};
use crate::app::{Action, SessionState};
use crate::domain::error::Result;
use crate::domain::Move;
use crate::infrastructure::keys::{KeyEvent, KeyName};

/// Discrete input events consumed by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query. Space arrives here as `Char(' ')`.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Moves the selection up one row.
    Up,
    /// Moves the selection down one row.
    Down,
    /// Reserved; currently a no-op.
    Tab,
    /// Reserved; currently a no-op.
    Left,
    /// Reserved; currently a no-op.
    Right,
    /// Ctrl-C.
    Interrupt,
    /// Enter.
    Confirm,
}

impl Event {
    /// Maps a decoded key to a prompt event.
    ///
    /// Returns `None` for keys the prompt does not react to at all (escape,
    /// function keys, control chords other than Ctrl-C).
    ///
    /// ```
    /// use autoprompt::app::Event;
    /// use autoprompt::infrastructure::keys::{KeyEvent, KeyName};
    ///
    /// assert_eq!(Event::from_key(&KeyEvent::ctrl('c')), Some(Event::Interrupt));
    /// assert_eq!(Event::from_key(&KeyEvent::named(KeyName::Space)), Some(Event::Char(' ')));
    /// assert_eq!(Event::from_key(&KeyEvent::char('x')), Some(Event::Char('x')));
    /// ```
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.ctrl && matches!(key.character, Some('c' | 'C')) {
            return Some(Self::Interrupt);
        }

        match key.name {
            Some(KeyName::Tab) => return Some(Self::Tab),
            Some(KeyName::Left) => return Some(Self::Left),
            Some(KeyName::Right) => return Some(Self::Right),
            Some(KeyName::Up) => return Some(Self::Up),
            Some(KeyName::Down) => return Some(Self::Down),
            Some(KeyName::Space) => return Some(Self::Char(' ')),
            Some(KeyName::Backspace) => return Some(Self::Backspace),
            Some(KeyName::Return) => return Some(Self::Confirm),
            Some(KeyName::Escape) => return None,
            None => {}
        }

        match key.character {
            Some(c) if !key.ctrl && !c.is_control() => Some(Self::Char(c)),
            _ => None,
        }
    }
}

/// Processes an event, mutates session state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. `should_render` is `false` for no-ops
/// (ignored keys, moves at the list edges, confirm with nothing selected,
/// backspace on an empty query) and for resolving events, which hand the
/// terminal back instead of redrawing.
///
/// Events received after the session resolved are ignored.
///
/// # Errors
///
/// Propagates [`PromptError::Pattern`](crate::PromptError::Pattern) from the
/// matcher.
pub fn handle_event(state: &mut SessionState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if !state.is_editing() {
        tracing::debug!("session already resolved, ignoring event");
        return Ok((false, vec![]));
    }

    match event {
        Event::Char(c) => {
            state.query.push(*c);
            tracing::trace!(query = %state.query, char = %c, "query updated");
            state.apply_query()?;
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.apply_query()?;
            Ok((true, vec![]))
        }
        Event::Up => Ok((state.move_selection(Move::Up), vec![])),
        Event::Down => Ok((state.move_selection(Move::Down), vec![])),
        Event::Tab | Event::Left | Event::Right => Ok((false, vec![])),
        Event::Interrupt => {
            tracing::debug!(policy = ?state.interrupt, "interrupt received");
            state.phase = Phase::Resolved(Outcome::Cancelled);
            let action = match state.interrupt {
                InterruptPolicy::Exit => Action::Exit,
                InterruptPolicy::Cancel => Action::Cancel,
            };
            Ok((false, vec![action]))
        }
        Event::Confirm => {
            let Some(selected) = state.selected_match() else {
                tracing::debug!("no candidate selected");
                return Ok((false, vec![]));
            };

            let candidate = selected.candidate.clone();
            tracing::debug!(
                index = candidate.index,
                text = %candidate.text,
                "candidate confirmed"
            );

            state.phase = Phase::Resolved(Outcome::Confirmed(candidate.clone()));
            Ok((false, vec![Action::Confirm(candidate)]))
        }
    }
}
