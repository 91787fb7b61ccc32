//! Structured logging setup.
//!
//! All modules log through `tracing` macros and spans. This module installs
//! the subscriber that filters and prints them.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
