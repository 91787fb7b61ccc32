//! Error types for the site core.
//!
//! This module defines the centralized error type [`SiteError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! Routing itself never fails: unknown paths resolve to the home state. Errors
//! come from the edges of the system (preference storage, configuration, value
//! parsing) and from view subscribers, whose failures are contained by the store.

use thiserror::Error;

/// The main error type for site operations.
///
/// # Examples
///
/// ```
/// use sticks_site::SiteError;
///
/// fn load_preferences() -> Result<(), SiteError> {
///     Err(SiteError::Storage("preferences file is locked".to_string()))
/// }
///
/// assert!(load_preferences().is_err());
/// ```
#[derive(Debug, Error)]
pub enum SiteError {
    /// Preference storage operation failed.
    ///
    /// Occurs when reading from or writing to the preferences backend fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A string did not name one of the four site sections.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// A string did not name a supported language.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// A date string could not be parsed for display.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A state subscriber reported a failure while rendering.
    ///
    /// Returned by subscriber callbacks; the store logs it and keeps notifying
    /// the remaining subscribers.
    #[error("Subscriber error: {0}")]
    Subscriber(String),
}

/// A specialized `Result` type for site operations.
pub type Result<T> = std::result::Result<T, SiteError>;
