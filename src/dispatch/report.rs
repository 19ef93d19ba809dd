//! # Outcome of a single fire.

use crate::error::FailureCause;

/// One subscriber that failed during a fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchFailure {
    /// Subscriber name ([`Handler::name`](crate::Handler::name)).
    pub subscriber: String,
    /// Zero-based position of the subscriber in the snapshot that was fired.
    pub position: usize,
    /// What went wrong.
    pub cause: FailureCause,
}

/// Result of [`Registry::fire`](crate::Registry::fire).
///
/// `invoked + skipped` equals the number of subscribers registered under
/// `event` when the fire started.
#[derive(Debug, Clone)]
#[must_use = "a dispatch report carries subscriber failures"]
pub struct DispatchReport<K> {
    /// Event identifier that was fired.
    pub event: K,
    /// Subscribers that were called (successfully or not).
    pub invoked: usize,
    /// Subscribers not called because dispatch stopped early.
    pub skipped: usize,
    /// Failures in invocation order.
    pub failures: Vec<DispatchFailure>,
}

impl<K> DispatchReport<K> {
    pub(crate) fn new(event: K) -> Self {
        Self {
            event,
            invoked: 0,
            skipped: 0,
            failures: Vec::new(),
        }
    }

    /// True if every subscriber ran and none failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.skipped == 0
    }

    /// True if there was nobody to notify.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invoked == 0 && self.skipped == 0
    }

    /// Number of subscribers that ran without failing.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.invoked - self.failures.len()
    }
}
