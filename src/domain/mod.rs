//! Domain layer for the site core.
//!
//! This module contains the value types shared by every other layer: sections,
//! languages, parsed routes and the error type. Nothing here touches history,
//! storage or the host environment.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`language`]: Site languages, detection and date formatting
//! - [`route`]: Path parsing and path building
//! - [`section`]: The four top-level content sections
//!
//! # Examples
//!
//! ```
//! use sticks_site::domain::{Language, Route, Section};
//!
//! let route = Route::parse("/en/services");
//! assert_eq!(route.section, Some(Section::Services));
//! assert_eq!(route.language, Language::En);
//! assert_eq!(route.to_path(), "/en/services");
//! ```

pub mod error;
pub mod language;
pub mod route;
pub mod section;

pub use error::{Result, SiteError};
pub use language::Language;
pub use route::{build_path, Route};
pub use section::Section;
