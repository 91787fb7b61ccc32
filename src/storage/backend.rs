//! Preferences backend abstraction.
//!
//! This module defines the [`Preferences`] trait, a string key/value store
//! playing the role of browser local storage. Values are strings, exactly as
//! local storage stores them; callers own the encoding (`"true"`/`"false"`
//! for flags).

use crate::domain::error::Result;

/// Persistent string key/value store.
///
/// # Implementations
///
/// - [`JsonPreferences`](super::JsonPreferences): JSON file with atomic writes
/// - [`MemoryPreferences`](super::MemoryPreferences): in-memory, for tests and
///   hosts without persistence
///
/// # Examples
///
/// ```
/// use sticks_site::storage::{MemoryPreferences, Preferences};
///
/// let mut prefs = MemoryPreferences::default();
/// prefs.set("audioMuted", "true")?;
/// assert_eq!(prefs.get("audioMuted")?.as_deref(), Some("true"));
/// assert_eq!(prefs.get("missing")?, None);
/// # Ok::<(), sticks_site::SiteError>(())
/// ```
pub trait Preferences {
    /// Reads a value. Returns `Ok(None)` for unknown keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes a value. Removing an unknown key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<()>;
}
