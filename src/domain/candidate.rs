//! Candidate and match result types.
//!
//! A [`Candidate`] is one selectable item from the caller-supplied list. Its
//! identity is its position in that list; the prompt never deduplicates or
//! mutates candidates. A [`MatchResult`] is derived from a candidate for the
//! current query and is rebuilt from scratch whenever the query changes.

use serde::Serialize;

/// One selectable item from the caller-supplied list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Position in the original candidate list.
    pub index: usize,
    /// Display text, delivered unchanged on confirmation.
    pub text: String,
}

impl Candidate {
    /// Builds positional candidates from a list of display strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoprompt::domain::Candidate;
    ///
    /// let candidates = Candidate::from_texts(["run a report", "restart service"]);
    /// assert_eq!(candidates[1].index, 1);
    /// assert_eq!(candidates[1].text, "restart service");
    /// ```
    #[must_use]
    pub fn from_texts<I, S>(texts: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Self {
                index,
                text: text.into(),
            })
            .collect()
    }
}

/// A candidate that matched the current query.
///
/// `highlight_ranges` are `(start, end)` byte offsets into `candidate.text`
/// (exclusive end). They are sorted, non-overlapping, and always fall on
/// character boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub candidate: Candidate,
    pub highlight_ranges: Vec<(usize, usize)>,
    /// Whether the candidate contained the whole query (as opposed to only
    /// one of its tokens). Always `false` for the empty query.
    pub whole_query: bool,
}

impl MatchResult {
    /// Wraps a candidate with no highlighting.
    #[must_use]
    pub const fn unhighlighted(candidate: Candidate) -> Self {
        Self {
            candidate,
            highlight_ranges: Vec::new(),
            whole_query: false,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.candidate.text
    }
}
