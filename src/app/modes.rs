//! Content panel phase for the presentation layer.
//!
//! The router computes an [`AppPhase`] on every route change; views read it to
//! decide whether to animate the content panel open. The router never reads it
//! back.
//!
//! # State Machine
//!
//! ```text
//!            first route with a section
//!   Idle ────────────────────────────────► Expanded   (no entry animation)
//!    ▲  │       later route with a section
//!    │  └─────────────────────────────────► Expanding  (entry animation)
//!    └──────────── route without a section ─┘
//! ```

use serde::{Deserialize, Serialize};

/// Whether the content panel is collapsed, opening, or already open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppPhase {
    /// No section active; the quadrant grid is shown.
    #[default]
    Idle,

    /// A section was entered by navigation and the panel animates open.
    Expanding,

    /// A section was deep-linked on page load and the panel is shown open
    /// without animation.
    Expanded,
}

impl AppPhase {
    /// Returns `true` when a section panel is visible (opening or open).
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Expanding | Self::Expanded)
    }
}
