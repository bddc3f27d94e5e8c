//! Domain layer: the pure matching-and-selection engine.
//!
//! Nothing in this module touches the terminal. The matcher and the viewport
//! are plain functions over in-memory data and can be exercised directly in
//! tests.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`candidate`]: Candidate and match result types
//! - [`matcher`]: Literal query matching with highlight ranges
//! - [`viewport`]: Sliding-window cursor math
//!
//! # Examples
//!
//! ```
//! use autoprompt::domain::{compute_window, match_candidates, Candidate, MatchOrder, Move, Window};
//!
//! let candidates = Candidate::from_texts(["order some widgets", "run a report"]);
//! let matches = match_candidates(&candidates, "report", MatchOrder::Original)?;
//! let window = compute_window(matches.len(), 5, Window::reset(0), Move::Reset);
//!
//! assert_eq!(window.selected_index(), Some(0));
//! assert_eq!(matches[0].text(), "run a report");
//! # Ok::<(), autoprompt::PromptError>(())
//! ```

pub mod candidate;
pub mod error;
pub mod matcher;
pub mod viewport;

pub use candidate::{Candidate, MatchResult};
pub use error::{PromptError, Result};
pub use matcher::{escape_pattern, match_candidates, MatchOrder, Matcher};
pub use viewport::{compute_window, Move, Window};
