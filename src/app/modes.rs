//! Prompt lifecycle and policy types.
//!
//! A prompt session is a two-state machine:
//!
//! ```text
//! Editing ──confirm──▶ Resolved(Confirmed)
//!    │
//!    └──interrupt───▶ Resolved(Cancelled)   (or process exit, see InterruptPolicy)
//! ```
//!
//! Once resolved, a session ignores all further events.

use crate::domain::Candidate;
use serde::Deserialize;
use std::str::FromStr;

/// Final result of a prompt session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed a candidate. Carries its original index and text.
    Confirmed(Candidate),
    /// The user interrupted the prompt under [`InterruptPolicy::Cancel`].
    Cancelled,
}

impl Outcome {
    /// The confirmed text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Confirmed(candidate) => Some(&candidate.text),
            Self::Cancelled => None,
        }
    }
}

/// Session lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Accepting key events.
    Editing,
    /// Terminal state; no further events are processed.
    Resolved(Outcome),
}

/// Process exit status used by [`InterruptPolicy::Exit`] (128 + SIGINT).
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// What an interrupt (Ctrl-C) does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterruptPolicy {
    /// Restore the terminal and terminate the process with status 130.
    /// The result callback is never invoked.
    #[default]
    Exit,
    /// Restore the terminal and resolve with [`Outcome::Cancelled`].
    Cancel,
}

impl FromStr for InterruptPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exit" => Ok(Self::Exit),
            "cancel" => Ok(Self::Cancel),
            other => Err(format!("unknown interrupt policy `{other}`")),
        }
    }
}
