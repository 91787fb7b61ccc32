//! Client-side router mapping location paths to application state.
//!
//! The router owns the session [`History`] and writes every resolved route into
//! the injected [`StateStore`]. It is the only sanctioned way to change the
//! section, language or portfolio slug.
//!
//! # Write first, then read back
//!
//! [`Router::navigate`] records the new entry in history and then calls
//! [`Router::handle_route`], which parses the *current history location*
//! rather than the argument. Back/forward moves take the same path through
//! [`Router::on_pop_state`], so both kinds of navigation resolve state
//! identically.
//!
//! # Example
//!
//! ```rust
//! use sticks_site::app::{AppPhase, Router, StateStore};
//! use sticks_site::infrastructure::MemoryHistory;
//! use sticks_site::{Language, Section};
//!
//! let store = StateStore::default();
//! let mut router = Router::new(store.clone(), MemoryHistory::new("/"));
//! router.init("ko-KR");
//!
//! router.navigate("/en/portfolio/lg-2023-new-years-message", false);
//! let state = store.get_state();
//! assert_eq!(state.current_section, Some(Section::Portfolio));
//! assert_eq!(state.language, Language::En);
//! assert_eq!(state.app_state, AppPhase::Expanding);
//! ```

use super::modes::AppPhase;
use super::state::StatePatch;
use super::store::StateStore;
use crate::domain::{self, Language, Route, Section};
use crate::infrastructure::History;

/// Path of the English home page used by first-load detection.
const ENGLISH_ROOT: &str = "/en/";

/// Router over a session history `H`.
#[derive(Debug)]
pub struct Router<H: History> {
    store: StateStore,
    history: H,
    detect_language: bool,
    has_detected_language: bool,
    is_initial_load: bool,
}

impl<H: History> Router<H> {
    /// Creates a router writing into `store` and navigating `history`.
    ///
    /// First-load language detection is enabled by default.
    #[must_use]
    pub fn new(store: StateStore, history: H) -> Self {
        Self {
            store,
            history,
            detect_language: true,
            has_detected_language: false,
            is_initial_load: true,
        }
    }

    /// Enables or disables the first-load redirect to English.
    #[must_use]
    pub fn with_language_detection(mut self, enabled: bool) -> Self {
        self.detect_language = enabled;
        self
    }

    /// Starts routing for the session.
    ///
    /// Runs first-load language detection against `preferred_language` (the
    /// user agent's language tag) and then resolves the current location.
    pub fn init(&mut self, preferred_language: &str) {
        let _span = tracing::debug_span!("router_init", preferred_language = %preferred_language).entered();

        self.handle_initial_language_detection(preferred_language);
        self.handle_route();
    }

    /// Redirects a bare root visit to the English root for non-Korean visitors.
    ///
    /// Runs at most once per router. The redirect replaces the current entry
    /// and does not notify; the route is resolved by the caller afterwards.
    fn handle_initial_language_detection(&mut self, preferred_language: &str) {
        if !self.detect_language || self.has_detected_language {
            return;
        }
        self.has_detected_language = true;

        let current_path = self.history.pathname();
        if current_path != "/" && !current_path.is_empty() {
            return;
        }

        if Language::detect(preferred_language) == Language::Ko {
            tracing::debug!("korean visitor, staying on root");
            return;
        }

        tracing::debug!(from = %current_path, to = ENGLISH_ROOT, "redirecting to english root");
        self.history.replace_state(Self::parse_route(ENGLISH_ROOT), ENGLISH_ROOT);
    }

    /// Parses a location path into a [`Route`]. Never fails.
    #[must_use]
    pub fn parse_route(path: &str) -> Route {
        Route::parse(path)
    }

    /// Builds the canonical path for a section, language and optional slug.
    #[must_use]
    pub fn build_path(section: Option<Section>, language: Language, portfolio_slug: Option<&str>) -> String {
        domain::build_path(section, language, portfolio_slug)
    }

    /// Navigates to `path`, pushing a history entry (or replacing the current
    /// one when `replace` is set), then resolves the new location.
    pub fn navigate(&mut self, path: &str, replace: bool) {
        let _span = tracing::debug_span!("navigate", path = %path, replace = replace).entered();

        let route = Self::parse_route(path);
        if replace {
            self.history.replace_state(route, path);
        } else {
            self.history.push_state(route, path);
        }

        self.handle_route();
    }

    /// Resolves the current history location and merges it into the store.
    ///
    /// The panel phase is `Expanded` for the first route handled with a
    /// section, `Expanding` for later routes with a section, and `Idle`
    /// without one.
    pub fn handle_route(&mut self) {
        let path = self.history.pathname();
        let route = Self::parse_route(&path);

        let phase = match (route.section, self.is_initial_load) {
            (None, _) => AppPhase::Idle,
            (Some(_), true) => AppPhase::Expanded,
            (Some(_), false) => AppPhase::Expanding,
        };

        tracing::debug!(
            path = %path,
            section = ?route.section,
            language = %route.language,
            slug = ?route.portfolio_slug,
            phase = ?phase,
            initial = self.is_initial_load,
            "route resolved"
        );

        self.is_initial_load = false;
        self.store.set_state(StatePatch::from_route(route, phase));
    }

    /// Handles a back/forward move made outside the router.
    pub fn on_pop_state(&mut self) {
        tracing::debug!("popstate");
        self.handle_route();
    }

    /// Moves back one history entry. Returns `false` if already at the start.
    pub fn back(&mut self) -> bool {
        let moved = self.history.back();
        if moved {
            self.on_pop_state();
        }
        moved
    }

    /// Moves forward one history entry. Returns `false` if already at the end.
    pub fn forward(&mut self) -> bool {
        let moved = self.history.forward();
        if moved {
            self.on_pop_state();
        }
        moved
    }

    /// Navigates to the equivalent page in `language`, keeping the current
    /// section and portfolio slug.
    pub fn switch_language(&mut self, language: Language) {
        let state = self.store.get_state();
        let path = Self::build_path(state.current_section, language, state.active_portfolio_slug());

        tracing::debug!(from = %state.language, to = %language, path = %path, "switching language");
        self.navigate(&path, false);
    }

    /// Shared handle to the store this router writes into.
    #[must_use]
    pub const fn store(&self) -> &StateStore {
        &self.store
    }

    /// The session history.
    #[must_use]
    pub const fn history(&self) -> &H {
        &self.history
    }

    /// Returns `true` until the first route has been handled.
    #[must_use]
    pub const fn is_initial_load(&self) -> bool {
        self.is_initial_load
    }
}
