//! Site languages, browser-language detection and localized dates.

use super::error::{Result, SiteError};
use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language of the site.
///
/// Korean is the default; English pages live under the `/en` path prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Korean, served from the bare path.
    #[default]
    Ko,
    /// English, served under `/en`.
    En,
}

impl Language {
    /// Returns the language code used in paths and preferences.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    /// Returns the other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ko => Self::En,
            Self::En => Self::Ko,
        }
    }

    /// Maps a user-agent language preference (e.g. `ko-KR`, `en-US`) to a site language.
    ///
    /// Anything that does not start with `ko` (case-insensitive) is served in English.
    ///
    /// # Examples
    ///
    /// ```
    /// use sticks_site::Language;
    ///
    /// assert_eq!(Language::detect("ko-KR"), Language::Ko);
    /// assert_eq!(Language::detect("KO"), Language::Ko);
    /// assert_eq!(Language::detect("ja-JP"), Language::En);
    /// ```
    #[must_use]
    pub fn detect(preference: &str) -> Self {
        if preference.trim().to_lowercase().starts_with("ko") {
            Self::Ko
        } else {
            Self::En
        }
    }

    /// Formats an ISO date (`2023-01-15` or an RFC 3339 timestamp) as a long date.
    ///
    /// Korean renders as `2023년 1월 15일`, English as `January 15, 2023`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidDate`] if the input is neither a calendar date
    /// nor an RFC 3339 timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use sticks_site::Language;
    ///
    /// assert_eq!(Language::En.format_date("2023-01-15")?, "January 15, 2023");
    /// assert_eq!(Language::Ko.format_date("2023-01-15")?, "2023년 1월 15일");
    /// # Ok::<(), sticks_site::SiteError>(())
    /// ```
    pub fn format_date(self, iso_date: &str) -> Result<String> {
        let trimmed = iso_date.trim();
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
            .map_err(|e| SiteError::InvalidDate(format!("{iso_date}: {e}")))?;

        Ok(match self {
            Self::Ko => format!("{}년 {}월 {}일", date.year(), date.month(), date.day()),
            Self::En => date.format("%B %-d, %Y").to_string(),
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = SiteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ko" => Ok(Self::Ko),
            "en" => Ok(Self::En),
            other => Err(SiteError::UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_prefers_korean_only_for_ko_tags() {
        assert_eq!(Language::detect("ko"), Language::Ko);
        assert_eq!(Language::detect("Ko-kr"), Language::Ko);
        assert_eq!(Language::detect("en-GB"), Language::En);
        assert_eq!(Language::detect(""), Language::En);
    }

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Language::Ko.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn formats_rfc3339_timestamps_by_calendar_date() {
        assert_eq!(
            Language::En.format_date("2022-12-31T09:30:00+09:00").unwrap(),
            "December 31, 2022"
        );
        assert_eq!(Language::Ko.format_date("2024-03-05").unwrap(), "2024년 3월 5일");
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(matches!(
            Language::En.format_date("next tuesday"),
            Err(SiteError::InvalidDate(_))
        ));
    }

    #[test]
    fn parses_only_lowercase_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert!("EN".parse::<Language>().is_err());
    }
}
