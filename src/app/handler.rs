//! Event handling and state transition logic.
//!
//! This module implements the handler that turns host input (clicks, key
//! presses, history moves, audio failures) into router calls and side-effect
//! actions. It is the single entry point views use to change anything.
//!
//! # Architecture
//!
//! 1. The host reports an [`Event`]
//! 2. [`handle_event`] dispatches it to the router or narration manager
//! 3. The router merges the new route into the store, which re-renders
//!    subscribed views synchronously
//! 4. The handler compares the section before and after, cues narration, and
//!    returns the resulting [`Action`]s
//!
//! # Example
//!
//! ```rust
//! use sticks_site::app::{handle_event, Event, Router, Site, StateStore};
//! use sticks_site::audio::{NarrationConfig, NarrationManager};
//! use sticks_site::infrastructure::MemoryHistory;
//! use sticks_site::storage::MemoryPreferences;
//! use sticks_site::Section;
//!
//! let router = Router::new(StateStore::default(), MemoryHistory::new("/"));
//! let narration = NarrationManager::new(MemoryPreferences::default(), &NarrationConfig::default());
//! let mut site = Site::new(router, narration);
//! site.start("ko-KR");
//!
//! let (consumed, actions) = handle_event(&mut site, &Event::navigate("/about"))?;
//! assert!(consumed);
//! assert_eq!(actions.len(), 1); // PlayNarration
//! assert_eq!(site.state().current_section, Some(Section::About));
//! # Ok::<(), sticks_site::SiteError>(())
//! ```

use super::actions::Action;
use super::router::Router;
use super::shortcuts::{KeyPress, Shortcut};
use super::site::Site;
use crate::domain::error::Result;
use crate::domain::{Language, Section};
use crate::infrastructure::History;
use crate::storage::Preferences;

/// Input reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A link or view asked to go to `path`.
    Navigate {
        /// Target path.
        path: String,
        /// Replace the current history entry instead of pushing.
        replace: bool,
    },
    /// The host's history moved (browser back/forward) without the router.
    PopState,
    /// Go back one history entry.
    HistoryBack,
    /// Go forward one history entry.
    HistoryForward,
    /// A key was pressed.
    Key(KeyPress),
    /// The language toggle was clicked.
    ToggleLanguage,
    /// A specific language was chosen.
    SwitchLanguage(Language),
    /// The close button was clicked; return to the home grid.
    CloseSection,
    /// A portfolio tile or modal arrow selected an item.
    OpenPortfolioItem {
        /// Portfolio item identifier.
        slug: String,
    },
    /// The portfolio modal was dismissed; stay on the portfolio grid.
    ClosePortfolioItem,
    /// The audio toggle was clicked.
    ToggleMute,
    /// The host could not play a narration track.
    NarrationFailed {
        /// Section whose track failed.
        section: Section,
        /// Host error description.
        error: String,
    },
}

impl Event {
    /// Shorthand for a pushing [`Event::Navigate`].
    pub fn navigate(path: impl Into<String>) -> Self {
        Self::Navigate {
            path: path.into(),
            replace: false,
        }
    }
}

/// Processes an event and returns whether it was consumed plus the actions
/// to execute.
///
/// `consumed` is `false` only for key presses that are not shortcuts; the host
/// should let those through (no `preventDefault`). State changes are already
/// applied to the store when this returns.
///
/// # Errors
///
/// Returns an error if the mute preference cannot be persisted. Navigation
/// itself never fails.
pub fn handle_event<H: History, P: Preferences>(
    site: &mut Site<H, P>,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let before = site.state().current_section;

    match event {
        Event::Navigate { path, replace } => site.router.navigate(path, *replace),
        Event::PopState => site.router.on_pop_state(),
        Event::HistoryBack => {
            if !site.router.back() {
                tracing::debug!("already at the oldest history entry");
            }
        }
        Event::HistoryForward => {
            if !site.router.forward() {
                tracing::debug!("already at the newest history entry");
            }
        }
        Event::Key(press) => {
            let Some(shortcut) = Shortcut::from_key(press) else {
                return Ok((false, vec![]));
            };
            tracing::debug!(key = %press.key, shortcut = ?shortcut, "keyboard shortcut");

            if shortcut == Shortcut::ToggleMute {
                return Ok((true, site.narration.toggle_mute()?));
            }
            apply_shortcut(&mut site.router, shortcut);
        }
        Event::ToggleLanguage => {
            let language = site.state().language.toggled();
            site.router.switch_language(language);
        }
        Event::SwitchLanguage(language) => site.router.switch_language(*language),
        Event::CloseSection => {
            let path = Router::<H>::build_path(None, site.state().language, None);
            site.router.navigate(&path, false);
        }
        Event::OpenPortfolioItem { slug } => {
            let language = site.state().language;
            let path = Router::<H>::build_path(Some(Section::Portfolio), language, Some(slug.as_str()));
            site.router.navigate(&path, false);
        }
        Event::ClosePortfolioItem => {
            let path = Router::<H>::build_path(Some(Section::Portfolio), site.state().language, None);
            site.router.navigate(&path, false);
        }
        Event::ToggleMute => return Ok((true, site.narration.toggle_mute()?)),
        Event::NarrationFailed { section, error } => {
            site.narration.playback_failed(*section, error);
            return Ok((true, vec![]));
        }
    }

    let after = site.state().current_section;
    Ok((true, cue_narration(site, before, after)))
}

fn apply_shortcut<H: History>(router: &mut Router<H>, shortcut: Shortcut) {
    let language = router.store().get_state().language;

    match shortcut {
        Shortcut::SwitchLanguage(target) => router.switch_language(target),
        Shortcut::ToggleLanguage => router.switch_language(language.toggled()),
        Shortcut::OpenSection(section) => {
            let path = Router::<H>::build_path(Some(section), language, None);
            router.navigate(&path, false);
        }
        Shortcut::Back => {
            router.back();
        }
        Shortcut::ToggleMute => {}
    }
}

/// Plays the new section's narration when the section changed, or stops
/// narration when returning home.
fn cue_narration<H: History, P: Preferences>(
    site: &mut Site<H, P>,
    before: Option<Section>,
    after: Option<Section>,
) -> Vec<Action> {
    if before == after {
        return vec![];
    }

    tracing::debug!(from = ?before, to = ?after, "section changed");
    match after {
        Some(section) => site.narration.play(section),
        None => site.narration.stop(),
    }
}
