//! # Dispatch configuration.
//!
//! [`DispatchConfig`] controls what a [`Registry`](crate::Registry) does when a
//! subscriber fails during `fire`.
//!
//! - [`FailurePolicy::Continue`] keeps invoking the remaining subscribers (default).
//! - [`FailurePolicy::StopOnFirst`] stops at the first failure; the rest are counted as skipped.
//!
//! ```text
//! fire(id) ─► s1 ─► s2 (fails) ─► s3 ─► s4      Continue
//! fire(id) ─► s1 ─► s2 (fails) ─╳ s3, s4 skipped  StopOnFirst
//! ```

/// Policy applied when a subscriber returns an error or panics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure and keep dispatching (default).
    ///
    /// One bad subscriber cannot blind the others.
    #[default]
    Continue,
    /// Record the failure and skip every subscriber after it.
    StopOnFirst,
}

/// Configuration for a [`Registry`](crate::Registry).
///
/// ## Field semantics
/// - `failure_policy`: what happens to later subscribers after one fails
/// - `catch_panics`: `true` turns a subscriber panic into a recorded failure;
///   `false` lets the panic unwind through `fire`
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// Behaviour after a subscriber failure.
    pub failure_policy: FailurePolicy,

    /// Catch subscriber panics and report them as [`FailureCause::Panicked`](crate::FailureCause::Panicked).
    pub catch_panics: bool,
}

impl DispatchConfig {
    /// True if dispatch stops after the first failure.
    #[inline]
    pub fn stops_on_failure(&self) -> bool {
        self.failure_policy == FailurePolicy::StopOnFirst
    }
}

impl Default for DispatchConfig {
    /// Default configuration:
    ///
    /// - `failure_policy = FailurePolicy::Continue`
    /// - `catch_panics = true`
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            catch_panics: true,
        }
    }
}
