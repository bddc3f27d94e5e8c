//! Session state and view model computation.
//!
//! [`SessionState`] is the only long-lived mutable data in a prompt. It is
//! created per prompt invocation, mutated by
//! [`handle_event`](crate::app::handle_event), and dropped when the prompt
//! resolves. There is no process-wide state, so several prompts can run one
//! after another (or side by side in tests) without leaking into each other.
//!
//! # State Components
//!
//! - **Candidates**: the caller's list, never mutated
//! - **Query**: accumulated typed input, `""` shows every candidate
//! - **Matches**: recomputed from scratch whenever the query changes
//! - **Window**: visible slice offset and selected row
//! - **Phase**: `Editing` until confirm or interrupt
//!
//! # Example
//!
//! ```
//! use autoprompt::app::{InterruptPolicy, SessionState};
//! use autoprompt::domain::{Candidate, MatchOrder};
//!
//! let candidates = Candidate::from_texts(["run a report", "run batch process"]);
//! let mut state = SessionState::new(
//!     "choose:",
//!     candidates,
//!     5,
//!     MatchOrder::Original,
//!     InterruptPolicy::Cancel,
//! )?;
//!
//! state.query.push_str("batch");
//! state.apply_query()?;
//! assert_eq!(state.selected_match().map(|m| m.text()), Some("run batch process"));
//! # Ok::<(), autoprompt::PromptError>(())
//! ```

use super::modes::{InterruptPolicy, Phase};
use crate::domain::error::{PromptError, Result};
use crate::domain::{compute_window, Candidate, MatchOrder, MatchResult, Matcher, Move, Window};
use crate::ui::helpers::split_segments;
use crate::ui::viewmodel::{RowView, ViewModel};

/// Mutable state of one prompt invocation.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Prompt text written before the query.
    pub message: String,

    /// Caller-supplied candidates in original order.
    pub candidates: Vec<Candidate>,

    /// Current query text.
    ///
    /// Extended by `Char` events and shortened by `Backspace`. Call
    /// [`apply_query`](Self::apply_query) after editing it directly.
    pub query: String,

    /// Matches for the current query.
    pub matches: Vec<MatchResult>,

    /// Visible window into `matches`.
    pub window: Window,

    /// Number of candidate rows on screen. Always non-zero.
    pub capacity: usize,

    /// Output ordering for matches.
    pub match_order: MatchOrder,

    /// Behavior on interrupt.
    pub interrupt: InterruptPolicy,

    /// Lifecycle state.
    pub phase: Phase,
}

impl SessionState {
    /// Creates a session with an empty query and the first candidate selected.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(
        message: impl Into<String>,
        candidates: Vec<Candidate>,
        capacity: usize,
        match_order: MatchOrder,
        interrupt: InterruptPolicy,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(PromptError::InvalidCapacity);
        }

        let mut state = Self {
            message: message.into(),
            candidates,
            query: String::new(),
            matches: Vec::new(),
            window: Window::reset(0),
            capacity,
            match_order,
            interrupt,
            phase: Phase::Editing,
        };
        state.apply_query()?;
        Ok(state)
    }

    /// Re-runs the matcher for the current query and resets the window.
    ///
    /// # Errors
    ///
    /// Propagates [`PromptError::Pattern`] from the matcher.
    pub fn apply_query(&mut self) -> Result<()> {
        let _span = tracing::debug_span!(
            "apply_query",
            total_candidates = self.candidates.len(),
            query_len = self.query.len()
        )
        .entered();

        let matcher = Matcher::new(&self.query, self.match_order)?;
        self.matches = matcher.match_candidates(&self.candidates);
        self.window = compute_window(self.matches.len(), self.capacity, self.window, Move::Reset);

        tracing::debug!(matched = self.matches.len(), "query applied");
        Ok(())
    }

    /// Applies a cursor move. Returns `true` if the window changed.
    pub fn move_selection(&mut self, requested: Move) -> bool {
        let next = compute_window(self.matches.len(), self.capacity, self.window, requested);
        let changed = next != self.window;
        self.window = next;
        changed
    }

    /// Matches currently on screen, at most `capacity` of them.
    #[must_use]
    pub fn visible_matches(&self) -> &[MatchResult] {
        let start = self.window.offset.min(self.matches.len());
        let end = (start + self.capacity).min(self.matches.len());
        &self.matches[start..end]
    }

    /// The match under the cursor, if the cursor row exists in the visible slice.
    #[must_use]
    pub fn selected_match(&self) -> Option<&MatchResult> {
        self.window
            .cursor
            .and_then(|row| self.visible_matches().get(row))
    }

    /// Returns `true` while the session still accepts key events.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.phase, Phase::Editing)
    }

    /// Computes the renderable view of the current state.
    ///
    /// Always produces exactly `capacity` rows; rows past the end of the
    /// match list are empty so stale text gets cleared.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ViewModel {
        let visible = self.visible_matches();

        let rows = (0..self.capacity)
            .map(|row| {
                visible.get(row).map_or_else(RowView::default, |m| RowView {
                    selected: self.window.cursor == Some(row),
                    segments: split_segments(m.text(), &m.highlight_ranges),
                })
            })
            .collect();

        ViewModel {
            message: self.message.clone(),
            query: self.query.clone(),
            rows,
        }
    }
}
