//! Session history abstraction.
//!
//! The router never reads a location directly. It writes entries through the
//! [`History`] trait and then reads the current path back, so pushes, replaces
//! and back/forward moves all resolve state the same way.
//!
//! [`MemoryHistory`] is the in-process implementation: a stack of entries with
//! a cursor, behaving like a browser tab's session history.

use crate::domain::Route;

/// Host session history, modeled on the browser History API.
pub trait History {
    /// Path of the current entry, without query string or fragment.
    fn pathname(&self) -> String;

    /// Route stored with the current entry, if one was recorded.
    fn state(&self) -> Option<&Route>;

    /// Adds an entry after the current one, discarding any forward entries.
    fn push_state(&mut self, state: Route, url: &str);

    /// Overwrites the current entry.
    fn replace_state(&mut self, state: Route, url: &str);

    /// Moves one entry back. Returns `false` at the start of history.
    fn back(&mut self) -> bool;

    /// Moves one entry forward. Returns `false` at the end of history.
    fn forward(&mut self) -> bool;
}

/// One session history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// URL as passed to push/replace (may carry a query or fragment).
    pub url: String,
    /// Route recorded alongside the entry; `None` for the initial page load.
    pub state: Option<Route>,
}

/// In-memory session history.
///
/// # Examples
///
/// ```
/// use sticks_site::infrastructure::{History, MemoryHistory};
/// use sticks_site::Route;
///
/// let mut history = MemoryHistory::new("/");
/// history.push_state(Route::parse("/about"), "/about?ref=nav");
/// assert_eq!(history.pathname(), "/about");
///
/// assert!(history.back());
/// assert_eq!(history.pathname(), "/");
/// assert!(!history.back());
/// ```
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl MemoryHistory {
    /// Creates a history holding a single entry for the initial page load.
    #[must_use]
    pub fn new(initial_url: &str) -> Self {
        Self {
            entries: vec![HistoryEntry {
                url: initial_url.to_string(),
                state: None,
            }],
            index: 0,
        }
    }

    /// Number of entries, including forward entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a history holds at least the initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zero-based position of the current entry.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn pathname(&self) -> String {
        let url = self.current().url.as_str();
        let end = url.find(|c| c == '?' || c == '#').unwrap_or(url.len());
        let path = &url[..end];

        if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        }
    }

    fn state(&self) -> Option<&Route> {
        self.current().state.as_ref()
    }

    fn push_state(&mut self, state: Route, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            url: url.to_string(),
            state: Some(state),
        });
        self.index = self.entries.len() - 1;

        tracing::trace!(url = %url, depth = self.entries.len(), "history entry pushed");
    }

    fn replace_state(&mut self, state: Route, url: &str) {
        let index = self.index;
        self.entries[index] = HistoryEntry {
            url: url.to_string(),
            state: Some(state),
        };

        tracing::trace!(url = %url, "history entry replaced");
    }

    fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_after_back_discards_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push_state(Route::parse("/about"), "/about");
        history.push_state(Route::parse("/clients"), "/clients");

        assert!(history.back());
        history.push_state(Route::parse("/services"), "/services");

        assert_eq!(history.len(), 3);
        assert_eq!(history.pathname(), "/services");
        assert!(!history.forward());
    }

    #[test]
    fn replace_keeps_length_and_records_state() {
        let mut history = MemoryHistory::new("/");
        assert_eq!(history.state(), None);

        history.replace_state(Route::parse("/en/"), "/en/");

        assert_eq!(history.len(), 1);
        assert_eq!(history.pathname(), "/en/");
        assert_eq!(history.state(), Some(&Route::parse("/en/")));
    }

    #[test]
    fn pathname_drops_query_and_fragment() {
        let mut history = MemoryHistory::new("/portfolio#grid");
        assert_eq!(history.pathname(), "/portfolio");

        history.push_state(Route::default(), "?utm_source=mail");
        assert_eq!(history.pathname(), "/");

        history.push_state(Route::parse("/about"), "about");
        assert_eq!(history.pathname(), "/about");
    }

    #[test]
    fn forward_returns_to_the_newer_entry() {
        let mut history = MemoryHistory::default();
        history.push_state(Route::parse("/en/about"), "/en/about");

        assert!(history.back());
        assert_eq!(history.index(), 0);
        assert!(history.forward());
        assert_eq!(history.pathname(), "/en/about");
    }
}
