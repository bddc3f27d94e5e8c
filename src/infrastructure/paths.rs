//! Platform path utilities.
//!
//! Resolves where the prompt keeps its trace log and expands `~` in
//! user-supplied paths (config and theme files).

use std::path::PathBuf;

/// Returns the data directory for autoprompt files.
///
/// This is `<local data dir>/autoprompt`, e.g. `~/.local/share/autoprompt` on
/// Linux. Falls back to the system temp directory when the platform has no
/// data directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("autoprompt")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and all paths when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use autoprompt::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
