//! Display attributes and prompt themes.
//!
//! A [`Theme`] decides how the prompt line, highlighted match ranges, and the
//! selection marker look. Themes only use terminal display attributes
//! (bright, underscore, reverse, ...), never colors.
//!
//! # Built-in Themes
//!
//! - `default`: bright prompt, bright highlights, `" > "` marker
//! - `underline`: bright prompt, underscored highlights
//! - `reverse`: bright prompt, reverse-video highlights, `" » "` marker
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//! prompt = "bright"
//! highlight = "underscore"
//! marker = " * "
//! ```
//!
//! Omitted attributes fall back to `bright` and an omitted marker to `" > "`.

use crate::domain::error::{PromptError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Terminal display attribute, named after the classic ANSI SGR modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayAttribute {
    /// Clears all attributes.
    Reset,
    /// Bold / increased intensity.
    #[default]
    #[serde(alias = "bold")]
    Bright,
    Dim,
    #[serde(alias = "underline")]
    Underscore,
    Blink,
    Reverse,
    Hidden,
}

impl FromStr for DisplayAttribute {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reset" => Ok(Self::Reset),
            "bright" | "bold" => Ok(Self::Bright),
            "dim" => Ok(Self::Dim),
            "underscore" | "underline" => Ok(Self::Underscore),
            "blink" => Ok(Self::Blink),
            "reverse" => Ok(Self::Reverse),
            "hidden" => Ok(Self::Hidden),
            other => Err(format!("unknown display attribute `{other}`")),
        }
    }
}

fn default_marker() -> String {
    " > ".to_string()
}

/// Visual style for a prompt session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    /// Human-readable theme name.
    #[serde(default)]
    pub name: String,
    /// Attribute for the prompt text.
    #[serde(default)]
    pub prompt: DisplayAttribute,
    /// Attribute for highlighted match ranges.
    #[serde(default)]
    pub highlight: DisplayAttribute,
    /// Selection marker drawn at the start of the selected row.
    #[serde(default = "default_marker")]
    pub marker: String,
}

impl Theme {
    /// Loads a built-in theme by name. Returns `None` for unknown names.
    ///
    /// ```
    /// use autoprompt::ui::{DisplayAttribute, Theme};
    ///
    /// let theme = Theme::from_name("underline").unwrap();
    /// assert_eq!(theme.highlight, DisplayAttribute::Underscore);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "default" => include_str!("../../themes/default.toml"),
            "underline" => include_str!("../../themes/underline.toml"),
            "reverse" => include_str!("../../themes/reverse.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Theme`] if the file cannot be read or parsed, or
    /// if the marker is empty.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| PromptError::Theme(format!("failed to read {}: {e}", path.display())))?;

        let theme: Self = toml::from_str(&contents)
            .map_err(|e| PromptError::Theme(format!("failed to parse {}: {e}", path.display())))?;

        if theme.marker.is_empty() {
            return Err(PromptError::Theme("marker must not be empty".to_string()));
        }
        Ok(theme)
    }

    /// Width of the marker column in terminal cells.
    ///
    /// Counts `char`s; wide glyphs are not measured.
    #[must_use]
    pub fn marker_width(&self) -> u16 {
        u16::try_from(self.marker.chars().count()).unwrap_or(u16::MAX)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            prompt: DisplayAttribute::Bright,
            highlight: DisplayAttribute::Bright,
            marker: default_marker(),
        }
    }
}
