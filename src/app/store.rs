//! Observable store holding the single [`ApplicationState`].
//!
//! The store is a cheap-clone handle: the router, the event handler and every
//! view share one instance created at session start. All access happens on the
//! host's UI thread, so the handle is `Rc`-based and not `Send`.
//!
//! # Notification
//!
//! [`StateStore::set_state`] merges a patch and then runs every subscriber
//! synchronously, in registration order, before returning. There is no
//! batching: each call produces one full pass.
//!
//! Subscribers are isolated from one another. A subscriber that returns an
//! error or panics is logged and skipped; the remaining subscribers still see
//! the update and the state change itself stands.
//!
//! No internal borrow is held while a subscriber runs, so subscribers may read
//! state, set state, subscribe or unsubscribe from inside a notification.
//! The subscriber list is fixed when a pass starts: a listener subscribed
//! during a pass is first called on the next [`StateStore::set_state`], and a
//! listener unsubscribed during a pass is skipped if it has not run yet.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use sticks_site::app::{StatePatch, StateStore};
//! use sticks_site::Language;
//!
//! let store = StateStore::default();
//! let renders = Rc::new(Cell::new(0));
//!
//! let counter = Rc::clone(&renders);
//! let subscription = store.subscribe(StateStore::listener(move |_state| {
//!     counter.set(counter.get() + 1);
//!     Ok(())
//! }));
//!
//! store.set_state(StatePatch::new().language(Language::En));
//! assert_eq!(renders.get(), 1);
//! assert_eq!(store.get_state().language, Language::En);
//!
//! subscription.unsubscribe();
//! store.set_state(StatePatch::new().language(Language::Ko));
//! assert_eq!(renders.get(), 1);
//! ```

use super::state::{ApplicationState, StatePatch};
use crate::domain::Result;
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

/// Subscriber callback invoked with each new snapshot.
///
/// Identity is the `Rc` allocation: subscribing clones of the same `Rc` twice
/// registers it once.
pub type Listener = Rc<dyn Fn(&ApplicationState) -> Result<()>>;

#[derive(Default)]
struct StoreInner {
    state: RefCell<ApplicationState>,
    listeners: RefCell<Vec<Listener>>,
}

impl StoreInner {
    fn contains(&self, listener: &Listener) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|registered| Rc::ptr_eq(registered, listener))
    }
}

/// Shared handle to the application state and its subscribers.
#[derive(Clone, Default)]
pub struct StateStore {
    inner: Rc<StoreInner>,
}

impl StateStore {
    /// Creates a store with the given initial state.
    #[must_use]
    pub fn new(initial: ApplicationState) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(initial),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Wraps a closure as a [`Listener`].
    pub fn listener<F>(f: F) -> Listener
    where
        F: Fn(&ApplicationState) -> Result<()> + 'static,
    {
        Rc::new(f)
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn get_state(&self) -> ApplicationState {
        self.inner.state.borrow().clone()
    }

    /// Merges `patch` onto the current state and notifies every subscriber.
    ///
    /// Never fails. Subscriber failures are logged, not returned.
    pub fn set_state(&self, patch: StatePatch) {
        let _span = tracing::debug_span!("set_state", patch = ?patch).entered();

        {
            let mut state = self.inner.state.borrow_mut();
            let next = patch.apply(&state);
            *state = next;
        }

        self.notify();
    }

    /// Registers `listener` for every future [`set_state`](Self::set_state).
    ///
    /// Registering an already-subscribed listener is a no-op; both returned
    /// handles then refer to the same registration.
    pub fn subscribe(&self, listener: Listener) -> Subscription {
        if self.inner.contains(&listener) {
            tracing::trace!("listener already subscribed");
        } else {
            self.inner.listeners.borrow_mut().push(Rc::clone(&listener));
            tracing::trace!(
                subscribers = self.subscriber_count(),
                "listener subscribed"
            );
        }

        Subscription {
            store: Rc::downgrade(&self.inner),
            listener,
        }
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Runs every subscriber with the latest snapshot, in registration order.
    ///
    /// Iterates over the list as it was when the pass started.
    fn notify(&self) {
        let listeners: Vec<Listener> = self.inner.listeners.borrow().clone();

        for (index, listener) in listeners.iter().enumerate() {
            // Removed earlier in this pass by another subscriber.
            if !self.inner.contains(listener) {
                continue;
            }

            let snapshot = self.get_state();
            match panic::catch_unwind(AssertUnwindSafe(|| listener(&snapshot))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::error!(subscriber = index, error = %e, "subscriber failed during notify");
                }
                Err(payload) => {
                    tracing::error!(
                        subscriber = index,
                        panic = %panic_message(payload.as_ref()),
                        "subscriber panicked during notify"
                    );
                }
            }
        }
    }
}

impl fmt::Debug for StateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStore")
            .field("state", &*self.inner.state.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle returned by [`StateStore::subscribe`].
///
/// Dropping the handle keeps the listener registered; call
/// [`unsubscribe`](Self::unsubscribe) to remove it.
pub struct Subscription {
    store: Weak<StoreInner>,
    listener: Listener,
}

impl Subscription {
    /// Removes the listener from the store it was registered with.
    ///
    /// A no-op if the store is gone or the listener was already removed.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .listeners
                .borrow_mut()
                .retain(|registered| !Rc::ptr_eq(registered, &self.listener));
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.store.strong_count())
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::AppPhase;
    use crate::domain::{Language, Section, SiteError};
    use std::cell::Cell;

    fn recording(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Listener {
        let log = Rc::clone(log);
        StateStore::listener(move |_| {
            log.borrow_mut().push(name);
            Ok(())
        })
    }

    #[test]
    fn set_state_changes_only_patched_fields() {
        let store = StateStore::new(ApplicationState {
            current_section: Some(Section::Clients),
            language: Language::Ko,
            app_state: AppPhase::Expanding,
            portfolio_slug: None,
        });
        let before = store.get_state();

        store.set_state(StatePatch::new().language(Language::En));

        let after = store.get_state();
        assert_eq!(after.language, Language::En);
        assert_eq!(after.current_section, before.current_section);
        assert_eq!(after.app_state, before.app_state);
        assert_eq!(after.portfolio_slug, before.portfolio_slug);
    }

    #[test]
    fn snapshots_are_detached_copies() {
        let store = StateStore::default();
        let mut snapshot = store.get_state();
        snapshot.language = Language::En;

        assert_eq!(store.get_state().language, Language::Ko);
    }

    #[test]
    fn duplicate_subscription_is_notified_once() {
        let store = StateStore::default();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let listener = StateStore::listener(move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        });

        let _first = store.subscribe(Rc::clone(&listener));
        let _second = store.subscribe(listener);
        store.set_state(StatePatch::new().app_state(AppPhase::Idle));

        assert_eq!(store.subscriber_count(), 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = StateStore::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        let keep = store.subscribe(recording(&log, "keep"));
        let dropped = store.subscribe(recording(&log, "dropped"));
        dropped.unsubscribe();
        store.set_state(StatePatch::new());

        assert_eq!(*log.borrow(), vec!["keep"]);
        keep.unsubscribe();
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let store = StateStore::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let _a = store.subscribe(recording(&log, "a"));
        let _b = store.subscribe(recording(&log, "b"));
        let _c = store.subscribe(recording(&log, "c"));

        store.set_state(StatePatch::new());

        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn failing_subscribers_do_not_block_siblings() {
        let store = StateStore::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        let _err = store.subscribe(StateStore::listener(|_| {
            Err(SiteError::Subscriber("content view missing".to_string()))
        }));
        let _panics = store.subscribe(StateStore::listener(|_| panic!("modal exploded")));
        let _ok = store.subscribe(recording(&log, "ok"));

        store.set_state(StatePatch::new().section(Some(Section::About)));

        assert_eq!(*log.borrow(), vec!["ok"]);
        assert_eq!(store.get_state().current_section, Some(Section::About));
    }

    #[test]
    fn subscribers_may_set_state_reentrantly() {
        let store = StateStore::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let handle = store.clone();
        let _redirect = store.subscribe(StateStore::listener(move |state| {
            if state.current_section == Some(Section::Services) && state.language == Language::Ko {
                handle.set_state(StatePatch::new().language(Language::En));
            }
            Ok(())
        }));
        let sink = Rc::clone(&seen);
        let _observer = store.subscribe(StateStore::listener(move |state| {
            sink.borrow_mut().push(state.language);
            Ok(())
        }));

        store.set_state(StatePatch::new().section(Some(Section::Services)));

        // Nested pass first, then the outer pass resumes with the latest snapshot.
        assert_eq!(*seen.borrow(), vec![Language::En, Language::En]);
        assert_eq!(store.get_state().language, Language::En);
    }

    #[test]
    fn listener_removed_mid_pass_is_skipped() {
        let store = StateStore::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let victim = recording(&log, "victim");

        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let taken = Rc::clone(&slot);
        let _remover = store.subscribe(StateStore::listener(move |_| {
            if let Some(subscription) = taken.borrow_mut().take() {
                subscription.unsubscribe();
            }
            Ok(())
        }));
        *slot.borrow_mut() = Some(store.subscribe(victim));

        store.set_state(StatePatch::new());

        assert!(log.borrow().is_empty());
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn unsubscribe_after_store_dropped_is_harmless() {
        let store = StateStore::default();
        let subscription = store.subscribe(StateStore::listener(|_| Ok(())));
        drop(store);
        subscription.unsubscribe();
    }

    #[test]
    fn listener_added_mid_pass_waits_for_next_update() {
        let store = StateStore::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        let late = recording(&log, "late");
        let handle = store.clone();
        let added = Rc::new(Cell::new(false));
        let once = Rc::clone(&added);
        let _adder = store.subscribe(StateStore::listener(move |_| {
            if !once.replace(true) {
                let _ = handle.subscribe(Rc::clone(&late));
            }
            Ok(())
        }));

        store.set_state(StatePatch::new().language(Language::En));
        assert!(log.borrow().is_empty());
        assert_eq!(store.subscriber_count(), 2);

        store.set_state(StatePatch::new().language(Language::Ko));
        assert_eq!(*log.borrow(), vec!["late"]);
    }
}
