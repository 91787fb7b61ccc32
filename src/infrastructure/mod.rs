//! Infrastructure layer for host-environment interactions.
//!
//! This module holds the seams between the site core and its host: the
//! session history the router writes to, and the filesystem locations used
//! for persisted preferences.

pub mod history;
pub mod paths;

pub use history::{History, HistoryEntry, MemoryHistory};
pub use paths::{default_preferences_file, expand_tilde, get_data_dir};
