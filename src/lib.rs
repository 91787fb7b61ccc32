//! Sticks Site: routing and state core of the Sticks & Stones agency website.
//!
//! The site is a bilingual (Korean/English) single-page application. This
//! crate provides everything below the rendering layer:
//! - Path parsing and canonical path building for the four content sections
//! - A router integrated with session history (push, replace, back/forward)
//! - An observable state store that re-renders subscribed views
//! - Keyboard shortcuts, section narration, and a persisted mute preference
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host shell (main.rs / browser glue)                │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │ Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, keyboard shortcuts               │
//! │  - Router (path ⇄ state, history integration)       │
//! │  - StateStore (snapshot + subscribers)              │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Audio (audio/)│   │ Storage       │   │ Infrastructure│
//! │ - Narration   │   │ (storage/)    │   │ - History     │
//! │ - Mute state  │   │ - Preferences │   │ - Data paths  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Section, Language, Route, errors │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # URL Surface
//!
//! | Path | Section | Language | Slug |
//! |------|---------|----------|------|
//! | `/` | none | ko | |
//! | `/en/` | none | en | |
//! | `/about` | about | ko | |
//! | `/en/services` | services | en | |
//! | `/portfolio/<id>` | portfolio | ko | `<id>` |
//! | `/en/portfolio/<id>` | portfolio | en | `<id>` |
//! | `/unknown-section` | none | ko | |
//!
//! # Configuration
//!
//! ```toml
//! trace_level = "debug"
//! detect_language = true
//! preferences_file = "~/.local/share/sticks-site/preferences.json"
//!
//! [narration]
//! volume = 0.5
//!
//! [narration.tracks]
//! about = "/assets/audio/About.mp3"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sticks_site::app::{handle_event, Event};
//! use sticks_site::infrastructure::MemoryHistory;
//! use sticks_site::storage::MemoryPreferences;
//! use sticks_site::{initialize, AppPhase, Config, Language, Section};
//!
//! let mut site = initialize(&Config::default(), MemoryHistory::new("/"), MemoryPreferences::default());
//! site.start("en-US");
//! assert_eq!(site.state().language, Language::En);
//!
//! handle_event(&mut site, &Event::navigate("/en/portfolio/lg-2023-new-years-message"))?;
//! let state = site.state();
//! assert_eq!(state.current_section, Some(Section::Portfolio));
//! assert_eq!(state.app_state, AppPhase::Expanding);
//! # Ok::<(), sticks_site::SiteError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod audio;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;

pub use app::{handle_event, Action, AppPhase, ApplicationState, Event, Router, Site, StatePatch, StateStore};
pub use audio::NarrationConfig;
pub use domain::{build_path, Language, Result, Route, Section, SiteError};

use audio::NarrationManager;
use infrastructure::History;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use storage::Preferences;

/// Site configuration, loaded from a TOML file.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Redirect non-Korean visitors landing on `/` to `/en/`. Default: `true`
    pub detect_language: bool,

    /// Path of the JSON preferences file.
    ///
    /// A leading `~` is expanded. Default: `preferences.json` in the data
    /// directory.
    pub preferences_file: Option<String>,

    /// Narration tracks and volume.
    pub narration: NarrationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_level: None,
            detect_language: true,
            preferences_file: None,
            narration: NarrationConfig::default(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if the text is not valid TOML or a field
    /// has the wrong type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sticks_site::Config;
    ///
    /// let config = Config::from_toml_str(r#"
    ///     detect_language = false
    ///     [narration]
    ///     volume = 0.4
    /// "#)?;
    /// assert!(!config.detect_language);
    /// assert_eq!(config.narration.volume, 0.4);
    /// assert_eq!(config.narration.tracks.len(), 4);
    /// # Ok::<(), sticks_site::SiteError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SiteError::Config(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Io`] if the file cannot be read and
    /// [`SiteError::Config`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "loading configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Resolved location of the preferences file.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_file.as_deref().map_or_else(
            infrastructure::default_preferences_file,
            |file| PathBuf::from(infrastructure::expand_tilde(file)),
        )
    }
}

/// Builds the per-session [`Site`] from configuration.
///
/// Creates the single [`StateStore`] for the session, a router over
/// `history`, and a narration manager over `preferences`. Routing does not
/// start until [`Site::start`] is called.
pub fn initialize<H: History, P: Preferences>(config: &Config, history: H, preferences: P) -> Site<H, P> {
    tracing::debug!(
        detect_language = config.detect_language,
        tracks = config.narration.tracks.len(),
        "initializing site"
    );

    let store = StateStore::new(ApplicationState::default());
    let router = Router::new(store, history).with_language_detection(config.detect_language);
    let narration = NarrationManager::new(preferences, &config.narration);

    Site::new(router, narration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.detect_language);
        assert!((config.narration.volume - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn track_table_replaces_the_defaults() {
        let config = Config::from_toml_str(
            r#"
            [narration.tracks]
            about = "/audio/intro.mp3"
            "#,
        )
        .unwrap();

        assert_eq!(config.narration.tracks.len(), 1);
        assert_eq!(config.narration.tracks["about"], "/audio/intro.mp3");
    }

    #[test]
    fn wrong_types_are_config_errors() {
        assert!(matches!(
            Config::from_toml_str("detect_language = \"sometimes\""),
            Err(SiteError::Config(_))
        ));
    }

    #[test]
    fn load_reports_missing_files_as_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load(&dir.path().join("missing.toml")),
            Err(SiteError::Io(_))
        ));
    }

    #[test]
    fn explicit_preferences_path_is_used_verbatim() {
        let config = Config {
            preferences_file: Some("/var/lib/site/prefs.json".to_string()),
            ..Default::default()
        };
        assert_eq!(config.preferences_path(), PathBuf::from("/var/lib/site/prefs.json"));
    }
}
