//! # Registry: event identifier → ordered subscribers.
//!
//! [`Registry`] is owned by a publisher. Subscribers are appended per event
//! identifier and invoked synchronously, in registration order, when the
//! publisher fires that identifier.
//!
//! ## Architecture
//! ```text
//! subscribe(id, h)   ──► write lock ──► map[id].push(h)
//! unsubscribe(id, h) ──► write lock ──► map[id].remove(first ptr_eq(h))
//!
//! fire(id, sender, payload)
//!   ├─► read lock ──► snapshot = map[id].clone() ──► unlock
//!   └─► for h in snapshot (registration order):
//!         h.handle(sender, payload)
//!           ├─ Ok            ─► next
//!           ├─ Err / panic   ─► DispatchFailure recorded
//!           │                   ├─ Continue    ─► next
//!           │                   └─ StopOnFirst ─► skip the rest
//! ```
//!
//! ## Rules
//! - Duplicates are allowed: a handler subscribed twice fires twice.
//! - `unsubscribe` removes one registration (the first match) and is a no-op if absent.
//! - `fire` with no subscribers is a no-op.
//! - The lock is never held while a handler runs: handlers may subscribe or
//!   unsubscribe re-entrantly; such changes apply from the next `fire`.

use std::any::Any;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::dispatch::config::DispatchConfig;
use crate::dispatch::handler::{Handler, HandlerFn, HandlerRef};
use crate::dispatch::report::{DispatchFailure, DispatchReport};
use crate::error::{FailureCause, HandlerError};

/// Mapping from event identifier to an ordered list of subscribers.
///
/// - `K`: event identifier (usually a small `Copy` enum)
/// - `S`: sender type passed to handlers (usually the publisher itself)
/// - `P`: payload type
pub struct Registry<K, S, P> {
    handlers: RwLock<HashMap<K, Vec<HandlerRef<S, P>>>>,
    config: DispatchConfig,
}

impl<K, S, P> Registry<K, S, P>
where
    K: Eq + Hash + fmt::Debug,
    S: 'static,
    P: 'static,
{
    /// Creates an empty registry with [`DispatchConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DispatchConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: DispatchConfig) -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Returns the registry configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Appends `handler` to the subscribers of `event`.
    ///
    /// Always succeeds. Subscribing the same handle twice makes it fire twice.
    pub fn subscribe(&self, event: K, handler: HandlerRef<S, P>) {
        debug!(event = ?event, subscriber = handler.name(), "subscribe");
        self.write().entry(event).or_default().push(handler);
    }

    /// Wraps `f` in a [`HandlerFn`], subscribes it to `event` and returns the handle.
    ///
    /// Keep the returned handle to [`unsubscribe`](Self::unsubscribe) later.
    pub fn subscribe_fn<F>(
        &self,
        event: K,
        name: impl Into<Cow<'static, str>>,
        f: F,
    ) -> HandlerRef<S, P>
    where
        F: Fn(&S, &P) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        let handler: HandlerRef<S, P> = HandlerFn::arc(name, f);
        self.subscribe(event, Arc::clone(&handler));
        handler
    }

    /// Removes the first registration of `handler` under `event`.
    ///
    /// Matching is by identity (same `Arc` allocation). Returns `false`, and
    /// changes nothing, if the handler was not registered.
    pub fn unsubscribe(&self, event: &K, handler: &HandlerRef<S, P>) -> bool {
        let mut map = self.write();
        let Some(list) = map.get_mut(event) else {
            return false;
        };
        let Some(pos) = list.iter().position(|h| Arc::ptr_eq(h, handler)) else {
            return false;
        };

        list.remove(pos);
        if list.is_empty() {
            map.remove(event);
        }
        debug!(event = ?event, subscriber = handler.name(), "unsubscribe");
        true
    }

    /// Invokes every subscriber of `event`, in registration order, on the calling thread.
    ///
    /// The subscriber list is copied before the first handler runs, so
    /// subscriptions changed during this call take effect on the next fire.
    /// Failures are handled according to [`DispatchConfig`] and returned in the report.
    pub fn fire(&self, event: K, sender: &S, payload: &P) -> DispatchReport<K> {
        let snapshot = self.snapshot(&event);
        let total = snapshot.len();
        let mut report = DispatchReport::new(event);

        for (position, handler) in snapshot.iter().enumerate() {
            report.invoked += 1;
            let Err(cause) = self.invoke(handler.as_ref(), sender, payload) else {
                continue;
            };

            warn!(
                event = ?report.event,
                subscriber = handler.name(),
                position,
                label = cause.as_label(),
                error = %cause,
                "subscriber failed"
            );
            report.failures.push(DispatchFailure {
                subscriber: handler.name().to_string(),
                position,
                cause,
            });

            if self.config.stops_on_failure() {
                report.skipped = total - position - 1;
                break;
            }
        }
        report
    }

    /// Number of registrations under `event` (duplicates counted).
    #[must_use]
    pub fn subscriber_count(&self, event: &K) -> usize {
        self.read().get(event).map_or(0, Vec::len)
    }

    /// True if no event has any subscriber.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Removes every subscriber of `event`. Returns how many were removed.
    pub fn clear(&self, event: &K) -> usize {
        self.write().remove(event).map_or(0, |list| list.len())
    }

    /// Removes every subscriber of every event.
    pub fn clear_all(&self) {
        self.write().clear();
    }

    fn snapshot(&self, event: &K) -> Vec<HandlerRef<S, P>> {
        self.read().get(event).map(|list| list.to_vec()).unwrap_or_default()
    }

    fn invoke(&self, handler: &dyn Handler<S, P>, sender: &S, payload: &P) -> Result<(), FailureCause> {
        if !self.config.catch_panics {
            return handler.handle(sender, payload).map_err(FailureCause::from);
        }
        match panic::catch_unwind(AssertUnwindSafe(|| handler.handle(sender, payload))) {
            Ok(res) => res.map_err(FailureCause::from),
            Err(panic_err) => Err(FailureCause::Panicked(panic_message(panic_err.as_ref()))),
        }
    }

    // Handlers never run under the lock, so a poisoned lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, Vec<HandlerRef<S, P>>>> {
        self.handlers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, Vec<HandlerRef<S, P>>>> {
        self.handlers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, S, P> Default for Registry<K, S, P>
where
    K: Eq + Hash + fmt::Debug,
    S: 'static,
    P: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S, P> fmt::Debug for Registry<K, S, P>
where
    K: fmt::Debug,
    S: 'static,
    P: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let mut dbg = f.debug_map();
        for (event, list) in map.iter() {
            let names: Vec<&str> = list.iter().map(|h| h.name()).collect();
            dbg.entry(event, &names);
        }
        dbg.finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
