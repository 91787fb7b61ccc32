//! Section narration audio.
//!
//! Each content section has a short narrated introduction. Visitors can mute
//! narration; the choice is remembered in their preferences.

pub mod narration;

pub use narration::{NarrationConfig, NarrationManager, MUTE_PREFERENCE_KEY};
