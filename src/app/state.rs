//! Application state snapshot and typed partial updates.
//!
//! [`ApplicationState`] is the single source of truth for the UI. It is owned
//! by the [`StateStore`](super::store::StateStore) and only ever changed by
//! merging a [`StatePatch`] onto the previous snapshot: fields the patch does
//! not mention keep their previous value.
//!
//! # Example
//!
//! ```rust
//! use sticks_site::app::{ApplicationState, StatePatch};
//! use sticks_site::{Language, Section};
//!
//! let state = ApplicationState::default();
//! let next = StatePatch::new()
//!     .section(Some(Section::About))
//!     .language(Language::En)
//!     .apply(&state);
//!
//! assert_eq!(next.current_section, Some(Section::About));
//! assert_eq!(next.language, Language::En);
//! assert_eq!(next.app_state, state.app_state);
//! ```

use super::modes::AppPhase;
use crate::domain::{Language, Route, Section};
use serde::{Deserialize, Serialize};

/// Snapshot of everything the views render from.
///
/// Snapshots handed out by the store are copies; mutating one has no effect on
/// the store or on other subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationState {
    /// Active content section, `None` on the home grid.
    pub current_section: Option<Section>,

    /// Display language; always set, Korean by default.
    pub language: Language,

    /// Content panel phase, consumed by the presentation layer only.
    pub app_state: AppPhase,

    /// Addressed portfolio item.
    ///
    /// Only meaningful while `current_section` is portfolio; read it through
    /// [`active_portfolio_slug`](Self::active_portfolio_slug).
    pub portfolio_slug: Option<String>,
}

impl ApplicationState {
    /// Returns the portfolio slug if the portfolio section is active.
    #[must_use]
    pub fn active_portfolio_slug(&self) -> Option<&str> {
        match self.current_section {
            Some(Section::Portfolio) => self.portfolio_slug.as_deref(),
            _ => None,
        }
    }
}

/// Partial update merged onto an [`ApplicationState`].
///
/// Every field is optional. Nullable state fields use a nested `Option` so a
/// patch can distinguish "leave unchanged" (`None`) from "clear"
/// (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct StatePatch {
    /// New active section, or `Some(None)` to return home.
    pub current_section: Option<Option<Section>>,
    /// New display language.
    pub language: Option<Language>,
    /// New panel phase.
    pub app_state: Option<AppPhase>,
    /// New portfolio slug, or `Some(None)` to clear it.
    pub portfolio_slug: Option<Option<String>>,
}

impl StatePatch {
    /// Creates an empty patch that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the patch the router applies for a resolved route.
    ///
    /// Sets all four fields, so a route without a slug clears any previous one.
    pub fn from_route(route: Route, phase: AppPhase) -> Self {
        Self {
            current_section: Some(route.section),
            language: Some(route.language),
            app_state: Some(phase),
            portfolio_slug: Some(route.portfolio_slug),
        }
    }

    /// Sets the active section.
    pub fn section(mut self, section: Option<Section>) -> Self {
        self.current_section = Some(section);
        self
    }

    /// Sets the display language.
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the panel phase.
    pub fn app_state(mut self, phase: AppPhase) -> Self {
        self.app_state = Some(phase);
        self
    }

    /// Sets or clears the portfolio slug.
    pub fn portfolio_slug(mut self, slug: Option<impl Into<String>>) -> Self {
        self.portfolio_slug = Some(slug.map(Into::into));
        self
    }

    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.current_section.is_none()
            && self.language.is_none()
            && self.app_state.is_none()
            && self.portfolio_slug.is_none()
    }

    /// Shallow-merges this patch onto `state`, returning the new snapshot.
    #[must_use]
    pub fn apply(self, state: &ApplicationState) -> ApplicationState {
        ApplicationState {
            current_section: self.current_section.unwrap_or(state.current_section),
            language: self.language.unwrap_or(state.language),
            app_state: self.app_state.unwrap_or(state.app_state),
            portfolio_slug: self
                .portfolio_slug
                .unwrap_or_else(|| state.portfolio_slug.clone()),
        }
    }
}
