//! Section narration and the persisted mute preference.
//!
//! The manager does not play audio itself. It decides *what* should play and
//! returns [`Action`]s for the host to carry out, remembering which section's
//! track is current so it can stop it before starting another.

use crate::app::Action;
use crate::domain::{Result, Section};
use crate::storage::Preferences;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Preference key holding the mute flag (`"true"` / `"false"`).
pub const MUTE_PREFERENCE_KEY: &str = "audioMuted";

const DEFAULT_VOLUME: f32 = 0.7;

/// Narration settings from the `[narration]` table of the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    /// Playback volume in `0.0..=1.0`. Default: `0.7`
    pub volume: f32,

    /// Audio source per section token. Unknown tokens are ignored.
    pub tracks: BTreeMap<String, String>,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        let tracks = [
            (Section::About, "/assets/audio/About.mp3"),
            (Section::Services, "/assets/audio/Services.mp3"),
            (Section::Portfolio, "/assets/audio/Porforlio.mp3"),
            (Section::Clients, "/assets/audio/ClientsSay.mp3"),
        ]
        .into_iter()
        .map(|(section, source)| (section.as_str().to_string(), source.to_string()))
        .collect();

        Self {
            volume: DEFAULT_VOLUME,
            tracks,
        }
    }
}

/// Chooses narration tracks and owns the mute preference.
#[derive(Debug)]
pub struct NarrationManager<P: Preferences> {
    preferences: P,
    tracks: HashMap<Section, String>,
    volume: f32,
    muted: bool,
    current: Option<Section>,
}

impl<P: Preferences> NarrationManager<P> {
    /// Creates a manager, restoring the mute flag from `preferences`.
    ///
    /// An unreadable preference is logged and treated as "not muted".
    pub fn new(preferences: P, config: &NarrationConfig) -> Self {
        let muted = match preferences.get(MUTE_PREFERENCE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read mute preference, defaulting to unmuted");
                false
            }
        };

        let tracks = config
            .tracks
            .iter()
            .filter_map(|(token, source)| match Section::from_segment(token) {
                Some(section) => Some((section, source.clone())),
                None => {
                    tracing::warn!(section = %token, "ignoring narration track for unknown section");
                    None
                }
            })
            .collect();

        Self {
            preferences,
            tracks,
            volume: config.volume.clamp(0.0, 1.0),
            muted,
            current: None,
        }
    }

    /// Returns `true` while narration is muted.
    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    /// Section whose track is currently playing, if any.
    #[must_use]
    pub const fn current(&self) -> Option<Section> {
        self.current
    }

    /// Starts narration for `section`, stopping whatever was playing.
    ///
    /// Emits only the stop when muted or when the section has no track.
    pub fn play(&mut self, section: Section) -> Vec<Action> {
        let mut actions = self.stop();

        if self.muted {
            tracing::debug!(section = %section, "narration muted, not playing");
            return actions;
        }

        if let Some(source) = self.tracks.get(&section) {
            tracing::debug!(section = %section, source = %source, "playing narration");
            self.current = Some(section);
            actions.push(Action::PlayNarration {
                section,
                source: source.clone(),
                volume: self.volume,
            });
        }

        actions
    }

    /// Stops the current track, if one is playing.
    pub fn stop(&mut self) -> Vec<Action> {
        self.current
            .take()
            .map(|section| {
                tracing::debug!(section = %section, "stopping narration");
                vec![Action::StopNarration]
            })
            .unwrap_or_default()
    }

    /// Flips the mute flag and persists it. Muting stops the current track.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be written. Nothing changes
    /// in that case: the flag keeps its value and the current track stays
    /// current.
    pub fn toggle_mute(&mut self) -> Result<Vec<Action>> {
        let muted = !self.muted;
        self.preferences
            .set(MUTE_PREFERENCE_KEY, if muted { "true" } else { "false" })?;

        self.muted = muted;
        tracing::debug!(muted, "narration mute toggled");

        let mut actions = if muted { self.stop() } else { vec![] };
        actions.push(Action::MuteChanged { muted });

        Ok(actions)
    }

    /// Records that the host failed to start or continue playback.
    pub fn playback_failed(&mut self, section: Section, error: &str) {
        tracing::warn!(section = %section, error = %error, "narration playback failed");
        if self.current == Some(section) {
            self.current = None;
        }
    }

    /// The preferences backend.
    #[must_use]
    pub const fn preferences(&self) -> &P {
        &self.preferences
    }
}
