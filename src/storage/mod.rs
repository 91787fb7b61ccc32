//! Storage layer for persisted visitor preferences.
//!
//! The site keeps a handful of per-visitor settings (currently the narration
//! mute flag) in a local key/value store. This module abstracts that store so
//! the core runs the same against a JSON file or plain memory.
//!
//! # Modules
//!
//! - `backend`: Preferences trait abstraction
//! - `json`: JSON file-based implementation
//! - `memory`: In-memory implementation

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::Preferences;
pub use json::JsonPreferences;
pub use memory::MemoryPreferences;
