//! Side effects for the host to execute.
//!
//! State changes are applied directly to the store and rendered by
//! subscribers. Everything else the host must do in response to an event
//! (audio playback, updating the mute icon) is returned as an [`Action`].
//!
//! # Example
//!
//! ```rust
//! use sticks_site::app::Action;
//! use sticks_site::Section;
//!
//! let actions = vec![
//!     Action::StopNarration,
//!     Action::PlayNarration {
//!         section: Section::About,
//!         source: "/assets/audio/About.mp3".to_string(),
//!         volume: 0.7,
//!     },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::Section;

/// Commands produced by the event handler for the host runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Starts narration audio for a section.
    ///
    /// Always preceded by [`Action::StopNarration`] when another track was
    /// playing.
    PlayNarration {
        /// Section being narrated.
        section: Section,
        /// Audio source URL.
        source: String,
        /// Playback volume in `0.0..=1.0`.
        volume: f32,
    },

    /// Stops the current narration track and rewinds it.
    StopNarration,

    /// The mute preference changed; the audio toggle should redraw its icon.
    MuteChanged {
        /// New mute state.
        muted: bool,
    },
}
