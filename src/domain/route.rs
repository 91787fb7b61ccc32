//! Parsed URL paths and their inverse.
//!
//! A [`Route`] is the transient result of reading a location path. It is
//! produced on every navigation, stored alongside the history entry, and merged
//! into the application state right away.

use super::language::Language;
use super::section::Section;
use serde::{Deserialize, Serialize};

/// Path prefix segment that selects English.
const ENGLISH_PREFIX: &str = "en";

/// Section, language and optional portfolio slug addressed by a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Resolved section, `None` for the home page and unknown segments.
    pub section: Option<Section>,
    /// Language selected by the presence of the `/en` prefix.
    pub language: Language,
    /// Portfolio item identifier; only set when `section` is portfolio.
    pub portfolio_slug: Option<String>,
}

impl Route {
    /// Parses a location path.
    ///
    /// Empty segments are dropped, so repeated and trailing slashes are harmless.
    /// A leading `en` segment selects English and shifts the section lookup by
    /// one. Unknown section tokens resolve to `None` rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sticks_site::{Language, Route, Section};
    ///
    /// let route = Route::parse("/en/portfolio/lg-2023-new-years-message");
    /// assert_eq!(route.section, Some(Section::Portfolio));
    /// assert_eq!(route.language, Language::En);
    /// assert_eq!(route.portfolio_slug.as_deref(), Some("lg-2023-new-years-message"));
    ///
    /// assert_eq!(Route::parse("/unknown-section").section, None);
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let has_en_prefix = segments.first() == Some(&ENGLISH_PREFIX);
        let language = if has_en_prefix { Language::En } else { Language::Ko };
        let section_index = usize::from(has_en_prefix);

        let section = segments
            .get(section_index)
            .and_then(|segment| Section::from_segment(segment));

        let portfolio_slug = match section {
            Some(Section::Portfolio) => segments
                .get(section_index + 1)
                .map(|slug| (*slug).to_string()),
            _ => None,
        };

        Self {
            section,
            language,
            portfolio_slug,
        }
    }

    /// Builds the canonical path for this route.
    #[must_use]
    pub fn to_path(&self) -> String {
        build_path(self.section, self.language, self.portfolio_slug.as_deref())
    }
}

/// Builds the canonical path for a section, language and optional slug.
///
/// English paths carry the `/en` prefix. The bare case always ends in `/`. The
/// slug is appended only for the portfolio section.
///
/// # Examples
///
/// ```
/// use sticks_site::{build_path, Language, Section};
///
/// assert_eq!(build_path(None, Language::Ko, None), "/");
/// assert_eq!(build_path(None, Language::En, None), "/en/");
/// assert_eq!(build_path(Some(Section::About), Language::En, Some("ignored")), "/en/about");
/// assert_eq!(
///     build_path(Some(Section::Portfolio), Language::Ko, Some("ces-2022-hyundai-keynote")),
///     "/portfolio/ces-2022-hyundai-keynote"
/// );
/// ```
#[must_use]
pub fn build_path(section: Option<Section>, language: Language, portfolio_slug: Option<&str>) -> String {
    let prefix = match language {
        Language::En => "/en",
        Language::Ko => "",
    };

    match (section, portfolio_slug) {
        (None, _) => format!("{prefix}/"),
        (Some(Section::Portfolio), Some(slug)) => format!("{prefix}/portfolio/{slug}"),
        (Some(section), _) => format!("{prefix}/{section}"),
    }
}
