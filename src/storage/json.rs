//! JSON file-based preferences backend.
//!
//! This module provides a human-readable preferences store using JSON
//! serialization. It uses atomic file writes (write-to-temp + rename) so a
//! crash never leaves a half-written file behind.

use crate::domain::error::{Result, SiteError};
use crate::storage::backend::Preferences;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// JSON preferences container format.
///
/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferencesData {
    /// Version of the file format for future migrations.
    version: u32,

    /// Stored values, sorted by key for stable diffs.
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Default for PreferencesData {
    fn default() -> Self {
        Self {
            version: 1,
            values: BTreeMap::new(),
        }
    }
}

/// JSON file preferences backend.
///
/// The whole file is kept in memory and rewritten on every change.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "values": {
///     "audioMuted": "true"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonPreferences {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy, loaded on creation.
    data: PreferencesData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonPreferences {
    /// Creates or opens a JSON preferences file.
    ///
    /// If the file exists, loads it. Otherwise starts empty; the file is
    /// created on the first write. Parent directories are created
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sticks_site::storage::JsonPreferences;
    /// use std::path::PathBuf;
    ///
    /// let prefs = JsonPreferences::new(PathBuf::from("/tmp/preferences.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON preferences");

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preferences file yet, starting empty");
            PreferencesData::default()
        };

        tracing::debug!(value_count = data.values.len(), "preferences initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PreferencesData> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferencesData = serde_json::from_str(&contents)
            .map_err(|e| SiteError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, values = data.values.len(), "loaded preferences");
        Ok(data)
    }

    /// Saves to disk using an atomic write.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename
    /// fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| SiteError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl Preferences for JsonPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key = %key, value = %value).entered();

        if self.data.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }

        self.data.values.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_remove_preference", key = %key).entered();

        if self.data.values.remove(key).is_some() {
            self.dirty = true;
            self.save_to_file()?;
        }
        Ok(())
    }
}

impl Drop for JsonPreferences {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty preferences on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save preferences on drop");
            }
        }
    }
}
