//! Global keyboard shortcuts.
//!
//! Key presses are translated to [`Shortcut`]s before the event handler acts
//! on them. Presses aimed at an editable element are never treated as
//! shortcuts so typing in a form is unaffected.
//!
//! | key | shortcut |
//! |-----|----------|
//! | `e` / `k` | switch to English / Korean |
//! | `l` | toggle language |
//! | `a` `s` `p` `c` | open about / services / portfolio / clients |
//! | `m` | toggle narration mute |
//! | `b` | history back |

use crate::domain::{Language, Section};

/// Element that received a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyTarget {
    /// The page itself or any non-editable element.
    #[default]
    Document,
    /// An `<input>` element.
    Input,
    /// A `<textarea>` element.
    TextArea,
    /// A content-editable element.
    ContentEditable,
}

impl KeyTarget {
    /// Returns `true` for targets that accept typed text.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        !matches!(self, Self::Document)
    }
}

/// A key press as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Key value (`"e"`, `"E"`, `"Escape"`, ...).
    pub key: String,
    /// Element the press was aimed at.
    pub target: KeyTarget,
}

impl KeyPress {
    /// Creates a key press on the document.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: KeyTarget::Document,
        }
    }

    /// Sets the target element.
    #[must_use]
    pub fn on(mut self, target: KeyTarget) -> Self {
        self.target = target;
        self
    }
}

/// Command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Switch to the given language.
    SwitchLanguage(Language),
    /// Switch to whichever language is not active.
    ToggleLanguage,
    /// Open a section in the current language.
    OpenSection(Section),
    /// Toggle narration mute.
    ToggleMute,
    /// Go back one history entry.
    Back,
}

impl Shortcut {
    /// Resolves a key press to a shortcut.
    ///
    /// Returns `None` for unbound keys and for presses on editable targets.
    ///
    /// # Examples
    ///
    /// ```
    /// use sticks_site::app::{KeyPress, KeyTarget, Shortcut};
    /// use sticks_site::Section;
    ///
    /// assert_eq!(Shortcut::from_key(&KeyPress::new("P")), Some(Shortcut::OpenSection(Section::Portfolio)));
    /// assert_eq!(Shortcut::from_key(&KeyPress::new("p").on(KeyTarget::Input)), None);
    /// assert_eq!(Shortcut::from_key(&KeyPress::new("x")), None);
    /// ```
    #[must_use]
    pub fn from_key(press: &KeyPress) -> Option<Self> {
        if press.target.is_editable() {
            return None;
        }

        let shortcut = match press.key.to_lowercase().as_str() {
            "e" => Self::SwitchLanguage(Language::En),
            "k" => Self::SwitchLanguage(Language::Ko),
            "l" => Self::ToggleLanguage,
            "a" => Self::OpenSection(Section::About),
            "s" => Self::OpenSection(Section::Services),
            "c" => Self::OpenSection(Section::Clients),
            "p" => Self::OpenSection(Section::Portfolio),
            "m" => Self::ToggleMute,
            "b" => Self::Back,
            _ => return None,
        };

        Some(shortcut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_every_documented_key() {
        let expected = [
            ("e", Shortcut::SwitchLanguage(Language::En)),
            ("k", Shortcut::SwitchLanguage(Language::Ko)),
            ("l", Shortcut::ToggleLanguage),
            ("a", Shortcut::OpenSection(Section::About)),
            ("s", Shortcut::OpenSection(Section::Services)),
            ("c", Shortcut::OpenSection(Section::Clients)),
            ("p", Shortcut::OpenSection(Section::Portfolio)),
            ("m", Shortcut::ToggleMute),
            ("b", Shortcut::Back),
        ];

        for (key, shortcut) in expected {
            assert_eq!(Shortcut::from_key(&KeyPress::new(key)), Some(shortcut), "key {key}");
        }
    }

    #[test]
    fn editable_targets_swallow_nothing() {
        for target in [KeyTarget::Input, KeyTarget::TextArea, KeyTarget::ContentEditable] {
            assert_eq!(Shortcut::from_key(&KeyPress::new("a").on(target)), None);
        }
    }

    #[test]
    fn multi_character_keys_are_unbound() {
        assert_eq!(Shortcut::from_key(&KeyPress::new("Escape")), None);
        assert_eq!(Shortcut::from_key(&KeyPress::new("Backspace")), None);
    }
}
