//! Top-level content sections of the site.

use super::error::SiteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four top-level content areas.
///
/// Section tokens in URLs are matched exactly and case-sensitively: `about`,
/// `services`, `portfolio`, `clients`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Agency introduction.
    About,
    /// Service offerings.
    Services,
    /// Portfolio grid; the only section that addresses items by slug.
    Portfolio,
    /// Client list and testimonials.
    Clients,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Self; 4] = [Self::About, Self::Services, Self::Portfolio, Self::Clients];

    /// Returns the URL token for this section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::Clients => "clients",
        }
    }

    /// Resolves a path segment to a section.
    ///
    /// Returns `None` for anything that is not an exact section token.
    ///
    /// # Examples
    ///
    /// ```
    /// use sticks_site::Section;
    ///
    /// assert_eq!(Section::from_segment("about"), Some(Section::About));
    /// assert_eq!(Section::from_segment("About"), None);
    /// assert_eq!(Section::from_segment("blog"), None);
    /// ```
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == segment)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_segment(s).ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}
