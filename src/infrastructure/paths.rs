//! Path utilities for locating on-disk site data.
//!
//! Preferences (the local-storage equivalent) live in a per-user data
//! directory. These helpers resolve that directory and expand `~` in
//! configured paths.

use std::env;
use std::path::PathBuf;

/// Directory name used under the platform data directory.
const APP_DIR: &str = "sticks-site";

/// Returns the data directory for site storage.
///
/// Resolves to `$XDG_DATA_HOME/sticks-site` when set, otherwise
/// `~/.local/share/sticks-site`. Falls back to a relative `.sticks-site`
/// directory when no home directory is known.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(xdg) = env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }

    home_dir().map_or_else(
        || PathBuf::from(format!(".{APP_DIR}")),
        |home| home.join(".local").join("share").join(APP_DIR),
    )
}

/// Default location of the preferences file.
#[must_use]
pub fn default_preferences_file() -> PathBuf {
    get_data_dir().join("preferences.json")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and all paths when `$HOME` is unset, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use sticks_site::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~/path"), "relative/~/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = home_dir() else {
        return path.to_string();
    };
    let home = home.to_string_lossy();

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home.into_owned()
    } else {
        path.to_string()
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
