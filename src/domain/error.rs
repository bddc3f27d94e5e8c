//! Error types for the autocomplete prompt.
//!
//! This module defines the centralized error type [`PromptError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! Construction errors ([`PromptError::MissingArgument`],
//! [`PromptError::InvalidCapacity`]) are raised before any terminal state is
//! touched, so they are always safe to report on a normal-mode terminal.

use thiserror::Error;

/// The main error type for prompt operations.
///
/// # Examples
///
/// ```
/// use autoprompt::PromptError;
///
/// fn validate(capacity: usize) -> Result<(), PromptError> {
///     if capacity == 0 {
///         return Err(PromptError::InvalidCapacity);
///     }
///     Ok(())
/// }
///
/// assert!(validate(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum PromptError {
    /// A required argument was not supplied to the prompt builder.
    ///
    /// Only raised under strict validation. The string names the missing
    /// argument (e.g. `"prompt text"`).
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// The visible row capacity resolved to zero.
    #[error("Visible row capacity must be greater than zero")]
    InvalidCapacity,

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The search pattern could not be compiled.
    ///
    /// Queries are escaped before compilation, so this indicates an internal
    /// bug rather than bad user input.
    #[error("Pattern construction failed: {0}")]
    Pattern(#[from] regex::Error),

    /// Terminal I/O failed.
    ///
    /// Wraps errors from the renderer or key source. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for prompt operations.
pub type Result<T> = std::result::Result<T, PromptError>;
