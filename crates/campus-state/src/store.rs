//! # State Store
//!
//! Holds the current [`ApplicationState`] and notifies subscribers after
//! each dispatch. A `Store` is an ordinary value: create one per client
//! (or per test) and pass it where it is needed.
//!
//! Dispatches are serialized by the state lock so no update is lost.
//! Listeners run after the lock is released, so a listener may read the
//! state or dispatch again without deadlocking. Every dispatch notifies,
//! including no-op ones; listeners compare snapshots with `Arc::ptr_eq`
//! to skip work.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::action::Action;
use crate::reducer::{reduce, ApplicationState};

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&Arc<ApplicationState>) + Send + Sync>;

struct Inner {
    state: Mutex<Arc<ApplicationState>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

/// Injectable state container. Cloning shares the same state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.lock())
            .field("listeners", &self.inner.listeners.lock().len())
            .finish()
    }
}

impl Store {
    /// A store holding the empty initial snapshot.
    pub fn new() -> Self {
        Self::with_state(ApplicationState::initial())
    }

    /// A store starting from the given snapshot.
    pub fn with_state(state: Arc<ApplicationState>) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(1),
            }),
        }
    }

    /// The current snapshot.
    pub fn get_state(&self) -> Arc<ApplicationState> {
        Arc::clone(&self.inner.state.lock())
    }

    /// Reduce `action` into the current snapshot, notify subscribers, and
    /// return the new snapshot.
    pub fn dispatch(&self, action: Action) -> Arc<ApplicationState> {
        let next = {
            let mut current = self.inner.state.lock();
            let next = reduce(&current, &action);
            *current = Arc::clone(&next);
            next
        };
        tracing::debug!(action = action.kind(), "dispatched");

        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(&next);
        }
        next
    }

    /// Register a listener called with the new snapshot after every dispatch.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<ApplicationState>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        let listener: Listener = Arc::new(listener);
        self.inner.listeners.lock().push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
