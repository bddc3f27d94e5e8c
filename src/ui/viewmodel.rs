//! View model types representing renderable prompt state.
//!
//! View models are computed by
//! [`SessionState::compute_viewmodel`](crate::app::SessionState::compute_viewmodel)
//! and consumed by the renderer. They carry display-ready data only: the
//! query, and for each screen row the text split into highlighted and plain
//! segments. Styling is applied later from the [`Theme`](crate::ui::Theme).

/// Everything needed to redraw the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Prompt text shown before the query.
    pub message: String,

    /// Current query text.
    pub query: String,

    /// Exactly `capacity` rows; rows with no match are empty.
    pub rows: Vec<RowView>,
}

/// One candidate row on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowView {
    /// Whether the selection marker is drawn on this row.
    pub selected: bool,

    /// Row text split at highlight boundaries. Empty for blank rows.
    pub segments: Vec<Segment>,
}

impl RowView {
    /// Returns `true` if no candidate occupies this row.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.segments.is_empty()
    }

    /// The full row text with highlighting removed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A run of text that is either entirely highlighted or entirely plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}
