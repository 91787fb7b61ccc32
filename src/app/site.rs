//! Session-scoped composition of the router and narration manager.

use super::router::Router;
use super::state::ApplicationState;
use super::store::StateStore;
use crate::audio::NarrationManager;
use crate::infrastructure::History;
use crate::storage::Preferences;

/// Everything one visitor session needs, constructed once at startup.
///
/// The store is reachable through the router; views subscribe via
/// [`Site::store`] and send input through
/// [`handle_event`](super::handler::handle_event).
#[derive(Debug)]
pub struct Site<H: History, P: Preferences> {
    /// Path/state router, owning the session history.
    pub router: Router<H>,
    /// Narration track selection and mute preference.
    pub narration: NarrationManager<P>,
}

impl<H: History, P: Preferences> Site<H, P> {
    /// Bundles an existing router and narration manager.
    pub const fn new(router: Router<H>, narration: NarrationManager<P>) -> Self {
        Self { router, narration }
    }

    /// Shared state store.
    #[must_use]
    pub const fn store(&self) -> &StateStore {
        self.router.store()
    }

    /// Copy of the current state.
    #[must_use]
    pub fn state(&self) -> ApplicationState {
        self.router.store().get_state()
    }

    /// Starts routing for the session.
    ///
    /// Resolves the initial location (after first-load language detection).
    /// Narration is not started for a deep-linked section: playback waits for
    /// the first navigation the visitor makes.
    pub fn start(&mut self, preferred_language: &str) {
        let _span = tracing::debug_span!("site_start").entered();
        self.router.init(preferred_language);

        tracing::debug!(
            section = ?self.state().current_section,
            language = %self.state().language,
            muted = self.narration.is_muted(),
            "site started"
        );
    }
}
