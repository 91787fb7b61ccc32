//! Application layer coordinating state, routing, and events.
//!
//! This module sits between the host (browser shell, test harness, the
//! headless binary) and the domain/infrastructure/storage layers.
//!
//! # Architecture
//!
//! ```text
//! Host Input → Event → handle_event → Router → StateStore → subscribed views
//!                           │
//!                           └──────────────► Actions → Host side effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands returned to the host
//! - [`handler`]: Event processing and narration cueing
//! - [`modes`]: Content panel phase
//! - [`router`]: Path ⇄ state mapping over session history
//! - [`shortcuts`]: Keyboard shortcut resolution
//! - [`site`]: Per-session composition of router and narration
//! - [`state`]: State snapshot and typed partial updates
//! - [`store`]: Observable state store

pub mod actions;
pub mod handler;
pub mod modes;
pub mod router;
pub mod shortcuts;
pub mod site;
pub mod state;
pub mod store;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::AppPhase;
pub use router::Router;
pub use shortcuts::{KeyPress, KeyTarget, Shortcut};
pub use site::Site;
pub use state::{ApplicationState, StatePatch};
pub use store::{Listener, StateStore, Subscription};
