//! autoprompt: an interactive, keystroke-driven autocomplete selector for
//! text terminals.
//!
//! autoprompt shows a prompt line and a list of candidates. As the user types,
//! the list is filtered live:
//! - Candidates containing the whole query match, falling back to any-word
//!   matches; original order is kept unless
//!   [`MatchOrder::WholeQueryFirst`] is configured
//! - Matched ranges highlighted in place
//! - A scrolling window with a selection marker, moved with the arrow keys
//! - Enter delivers the selected candidate's original text exactly once

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Entry Points (lib.rs, main.rs)                     │  ← Prompt / CLI
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Dispatch loop (Controller)                       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                        │
//! ┌───────────────────────┐         ┌───────────────────────────┐
//! │ UI Layer (ui/)        │         │ Infrastructure (infra…/)  │
//! │ - Renderer trait      │         │ - Crossterm renderer      │
//! │ - Theming             │         │ - Key sources             │
//! │ - Highlight segments  │         │ - Raw-mode guard, paths   │
//! └───────────────────────┘         └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Pure logic
//! │  - Matcher                                          │
//! │  - Viewport                                         │
//! │  - Candidates, errors                               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - JSON trace file with rotation                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state machine with event/action model
//! - [`domain`]: Matcher, viewport, candidate and error types
//! - [`infrastructure`]: Terminal, keyboard, and path utilities
//! - [`ui`]: Renderer interface, drawing routine, themes
//! - [`observability`]: Tracing subscriber writing to a rotating file
//!
//! # Configuration
//!
//! A [`Config`] can be built in code, parsed from a string map with
//! [`Config::from_map`], or loaded from TOML with [`Config::from_file`]:
//!
//! ```toml
//! max_visible = 8
//! highlight_style = "underscore"
//! theme = "reverse"
//! match_order = "whole-query-first"
//! interrupt = "cancel"
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ## Result handle
//!
//! ```no_run
//! use autoprompt::{Outcome, Prompt};
//!
//! let prompt = Prompt::builder()
//!     .message("choose a file:")
//!     .candidates(["Cargo.toml", "README.md", "src/lib.rs"])
//!     .build()?;
//!
//! match prompt.run()? {
//!     Outcome::Confirmed(candidate) => println!("{}", candidate.text),
//!     Outcome::Cancelled => {}
//! }
//! # Ok::<(), autoprompt::PromptError>(())
//! ```
//!
//! ## Callback
//!
//! ```no_run
//! use autoprompt::{prompt_autocomplete, Config};
//!
//! let config = Config {
//!     max_visible: Some(10),
//!     ..Config::default()
//! };
//!
//! prompt_autocomplete("choose a file:", ["a.txt", "b.txt"], Some(config), |result| {
//!     if let Ok(text) = result {
//!         println!("picked {text}");
//!     }
//! })?;
//! # Ok::<(), autoprompt::PromptError>(())
//! ```
//!
//! ## Scripted session
//!
//! Any [`Renderer`](ui::Renderer) and [`KeySource`](infrastructure::KeySource)
//! can drive a prompt. Here the keys come from a script and the escape
//! sequences go to a buffer. [`CrosstermRenderer`](infrastructure::CrosstermRenderer)
//! still switches the controlling terminal into raw mode and asks it for its
//! size; the integration tests use a fully in-memory `Renderer` instead.
//!
//! ```no_run
//! use autoprompt::infrastructure::{CrosstermRenderer, KeyEvent, KeyName, ScriptedKeys};
//! use autoprompt::{Outcome, Prompt};
//!
//! let prompt = Prompt::builder()
//!     .message("do:")
//!     .candidates(["run a report", "restart service"])
//!     .build()?;
//!
//! let keys = ScriptedKeys::typing("rest").then(KeyEvent::named(KeyName::Return));
//! let outcome = prompt.run_with(CrosstermRenderer::new(Vec::new()), keys)?;
//! assert_eq!(outcome.text(), Some("restart service"));
//! # Ok::<(), autoprompt::PromptError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Per-Session State
//!
//! All mutable data lives in one [`SessionState`](app::SessionState) per
//! prompt. Nothing is process-global, so prompts can run back to back.
//!
//! ## Terminal Ownership
//!
//! Raw mode and the hidden cursor are held by a guard for the whole session
//! and restored on every exit path, including errors and panics.
//!
//! ## Immutable View Models
//!
//! Rendering goes through a computed view model, so state transitions can be
//! tested without a renderer and drawing can be tested without key input.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{InterruptPolicy, Outcome, INTERRUPT_EXIT_CODE};
pub use domain::{Candidate, MatchOrder, PromptError, Result};
pub use ui::{DisplayAttribute, Theme};

use app::{Controller, SessionState};
use infrastructure::{expand_tilde, CrosstermKeySource, CrosstermRenderer, KeySource};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use ui::Renderer;

/// Visible rows used when neither the config nor the terminal says otherwise.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Prompt text used under [`Validation::Lenient`] when none is given.
pub const DEFAULT_MESSAGE: &str = "Whatchya tryna do?";

/// Candidates used under [`Validation::Lenient`] when none are given.
pub const DEFAULT_CANDIDATES: [&str; 12] = [
    "order some widgets",
    "build some widgets",
    "sell some widgets",
    "run a report",
    "run batch process",
    "restart service",
    "something else",
    "build 1 widget",
    "build 2 widgets",
    "build 3 widgets",
    "build 4 widgets",
    "build 5 widgets",
];

/// How [`PromptBuilder::build`] treats a missing message or candidate list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Validation {
    /// Fail with [`PromptError::MissingArgument`].
    #[default]
    Strict,
    /// Substitute [`DEFAULT_MESSAGE`] and [`DEFAULT_CANDIDATES`].
    Lenient,
}

impl FromStr for Validation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown validation mode `{other}`")),
        }
    }
}

/// Prompt configuration.
///
/// Every field is optional; [`Config::default`] gives a strict prompt that
/// sizes itself to the terminal, keeps candidates in their original order,
/// and exits the process on Ctrl-C.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of visible candidate rows.
    ///
    /// Default: terminal height − 2, or [`DEFAULT_MAX_VISIBLE`] when the
    /// height is unknown or too small. `Some(0)` is rejected with
    /// [`PromptError::InvalidCapacity`].
    #[serde(alias = "max_autocomplete")]
    pub max_visible: Option<usize>,

    /// Attribute for highlighted match ranges. Overrides the theme's.
    #[serde(alias = "highlight_mode")]
    pub highlight_style: Option<DisplayAttribute>,

    /// Built-in theme name (`default`, `underline`, `reverse`).
    ///
    /// Ignored if `theme_file` is set.
    #[serde(alias = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Output ordering for matches.
    #[serde(alias = "order")]
    pub match_order: MatchOrder,

    /// Handling of a missing message or candidate list.
    pub validation: Validation,

    /// Behavior on Ctrl-C.
    pub interrupt: InterruptPolicy,

    /// Tracing filter, e.g. `"debug"` or `"autoprompt=trace"`.
    ///
    /// `RUST_LOG` takes precedence. Tracing is off when neither is set.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string key/value map.
    ///
    /// Unparseable values are logged and replaced by their defaults rather
    /// than rejected.
    ///
    /// # Parsing Rules
    ///
    /// - `max_visible` (or `max_autocomplete`): `usize`
    /// - `highlight_style` (or `highlight_mode`): display attribute name
    /// - `theme`, `theme_file`, `trace_level`: taken verbatim
    /// - `match_order` (or `order`): `original` or `whole-query-first`
    /// - `validation`: `strict` or `lenient`
    /// - `interrupt`: `exit` or `cancel`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use autoprompt::{Config, DisplayAttribute};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("max_autocomplete".to_string(), "10".to_string());
    /// map.insert("highlight_mode".to_string(), "reverse".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.max_visible, Some(10));
    /// assert_eq!(config.highlight_style, Some(DisplayAttribute::Reverse));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            max_visible: parse_entry(map, &["max_visible", "max_autocomplete"]),
            highlight_style: parse_entry(map, &["highlight_style", "highlight_mode"]),
            theme_name: map.get("theme").cloned(),
            theme_file: map.get("theme_file").cloned(),
            match_order: parse_entry(map, &["match_order", "order"])
                .unwrap_or(defaults.match_order),
            validation: parse_entry(map, &["validation"]).unwrap_or(defaults.validation),
            interrupt: parse_entry(map, &["interrupt"]).unwrap_or(defaults.interrupt),
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Loads configuration from a TOML file. A leading `~` is expanded.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path = path
            .to_str()
            .map_or_else(|| path.to_path_buf(), expand_tilde);

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| PromptError::Config(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| PromptError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Resolves the number of visible rows.
    ///
    /// ```
    /// use autoprompt::{Config, DEFAULT_MAX_VISIBLE};
    ///
    /// let config = Config::default();
    /// assert_eq!(config.resolve_capacity(Some(24)), 22);
    /// assert_eq!(config.resolve_capacity(Some(2)), DEFAULT_MAX_VISIBLE);
    /// assert_eq!(config.resolve_capacity(None), DEFAULT_MAX_VISIBLE);
    /// ```
    #[must_use]
    pub fn resolve_capacity(&self, terminal_rows: Option<u16>) -> usize {
        self.max_visible.unwrap_or_else(|| {
            terminal_rows
                .map(|rows| usize::from(rows).saturating_sub(2))
                .filter(|&rows| rows > 0)
                .unwrap_or(DEFAULT_MAX_VISIBLE)
        })
    }

    /// Loads the configured theme, falling back to the default one.
    ///
    /// `highlight_style`, when set, replaces the theme's highlight attribute.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        let mut theme = self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        );

        if let Some(highlight) = self.highlight_style {
            theme.highlight = highlight;
        }
        theme
    }
}

/// Parses the first present key from `keys`. Logs and skips bad values.
fn parse_entry<T: FromStr>(map: &BTreeMap<String, String>, keys: &[&str]) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    let (key, raw) = keys
        .iter()
        .find_map(|key| map.get(*key).map(|raw| (*key, raw)))?;

    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(key, value = %raw, error = %e, "invalid config value, using default");
            None
        }
    }
}

/// A validated, ready-to-run prompt.
///
/// Construct with [`Prompt::builder`]. A `Prompt` can be run any number of
/// times; each run is an independent session.
#[derive(Debug, Clone)]
pub struct Prompt {
    message: String,
    candidates: Vec<Candidate>,
    config: Config,
    theme: Theme,
}

impl Prompt {
    /// Starts a [`PromptBuilder`] with no message, no candidates, and the
    /// default [`Config`].
    #[must_use]
    pub fn builder() -> PromptBuilder {
        PromptBuilder::default()
    }

    /// Prompt text shown before the query.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Runs the prompt on the controlling terminal, drawing on stderr.
    ///
    /// # Errors
    ///
    /// See [`run_with`](Self::run_with).
    pub fn run(&self) -> Result<Outcome> {
        self.run_with(CrosstermRenderer::stderr(), CrosstermKeySource)
    }

    /// Runs the prompt against the given renderer and key source.
    ///
    /// # Errors
    ///
    /// - [`PromptError::InvalidCapacity`] if the resolved capacity is zero,
    ///   before the terminal is touched
    /// - [`PromptError::Io`] if the renderer or key source fails
    pub fn run_with<R: Renderer, K: KeySource>(&self, renderer: R, keys: K) -> Result<Outcome> {
        let capacity = self.config.resolve_capacity(renderer.terminal_rows());
        let state = SessionState::new(
            self.message.clone(),
            self.candidates.clone(),
            capacity,
            self.config.match_order,
            self.config.interrupt,
        )?;

        Controller::new(state, self.theme.clone(), renderer, keys).run()
    }
}

/// Builder for [`Prompt`].
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    message: Option<String>,
    candidates: Option<Vec<Candidate>>,
    config: Config,
}

impl PromptBuilder {
    /// Sets the prompt text shown before the query.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the candidate list. Indices follow iteration order.
    #[must_use]
    pub fn candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = Some(Candidate::from_texts(candidates));
        self
    }

    /// Replaces the whole configuration. Defaults to [`Config::default`].
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Validates the arguments and loads the theme.
    ///
    /// An empty message counts as missing. An empty candidate list is valid
    /// and produces a prompt with nothing to select.
    ///
    /// # Errors
    ///
    /// - [`PromptError::MissingArgument`] under [`Validation::Strict`]
    /// - [`PromptError::InvalidCapacity`] if `max_visible` is `Some(0)`
    pub fn build(self) -> Result<Prompt> {
        let lenient = self.config.validation == Validation::Lenient;

        let message = match self.message.filter(|m| !m.is_empty()) {
            Some(message) => message,
            None if lenient => DEFAULT_MESSAGE.to_string(),
            None => return Err(PromptError::MissingArgument("prompt text")),
        };

        let candidates = match self.candidates {
            Some(candidates) => candidates,
            None if lenient => Candidate::from_texts(DEFAULT_CANDIDATES),
            None => return Err(PromptError::MissingArgument("candidates")),
        };

        if self.config.max_visible == Some(0) {
            return Err(PromptError::InvalidCapacity);
        }

        let theme = self.config.load_theme();
        tracing::debug!(
            candidates = candidates.len(),
            theme = %theme.name,
            "prompt built"
        );

        Ok(Prompt {
            message,
            candidates,
            config: self.config,
            theme,
        })
    }
}

/// Asks the user to pick one of `candidates` and hands the result to
/// `callback`.
///
/// `callback` is invoked exactly once with the confirmed text, or with the
/// error if the terminal fails mid-session. It is not invoked if the prompt
/// is cancelled, which is only possible with [`InterruptPolicy::Cancel`].
/// Under the default [`InterruptPolicy::Exit`] an interrupt terminates the
/// process.
///
/// Returns `Some(outcome)` when the session resolved, and `None` when it
/// failed and the error went to `callback`. `Some(Outcome::Cancelled)`
/// always means the user cancelled.
///
/// # Errors
///
/// Construction errors ([`PromptError::MissingArgument`],
/// [`PromptError::InvalidCapacity`]) are returned directly, without touching
/// the terminal or calling `callback`.
pub fn prompt_autocomplete<I, S, F>(
    message: &str,
    candidates: I,
    config: Option<Config>,
    callback: F,
) -> Result<Option<Outcome>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: FnOnce(Result<String>),
{
    let prompt = Prompt::builder()
        .message(message)
        .candidates(candidates)
        .config(config.unwrap_or_default())
        .build()?;

    Ok(deliver(prompt.run(), callback))
}

/// Routes a session result to the callback. `None` means the error was
/// handed over.
fn deliver<F>(result: Result<Outcome>, callback: F) -> Option<Outcome>
where
    F: FnOnce(Result<String>),
{
    match result {
        Ok(Outcome::Confirmed(candidate)) => {
            let outcome = Outcome::Confirmed(candidate.clone());
            callback(Ok(candidate.text));
            Some(outcome)
        }
        Ok(Outcome::Cancelled) => Some(Outcome::Cancelled),
        Err(e) => {
            tracing::debug!(error = %e, "session failed, error passed to callback");
            callback(Err(e));
            None
        }
    }
}
