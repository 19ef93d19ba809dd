//! # Subscriber trait and closure-backed subscribers.
//!
//! [`Handler`] is the extension point for reacting to fired events. A handler
//! receives a reference to the publisher that fired the event (`sender`) and an
//! immutable payload.
//!
//! ## Rules
//! - Handlers run synchronously on the thread calling `fire`, in registration order.
//! - A handler reports a fault by returning [`HandlerError`]; it never reaches the publisher as an `Err`.
//! - Panics are caught by the registry (unless disabled in [`DispatchConfig`](crate::DispatchConfig)).
//! - Identity is the `Arc` allocation: keep the [`HandlerRef`] returned from subscribe to unsubscribe later.
//!
//! ## Example
//! ```rust
//! use eventline::{Handler, HandlerError};
//!
//! struct Mailer;
//!
//! impl Handler<(), String> for Mailer {
//!     fn handle(&self, _sender: &(), title: &String) -> Result<(), HandlerError> {
//!         println!("mail: {title} is ready");
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "mailer" }
//! }
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::HandlerError;

/// Shared handle to a subscriber (`Arc<dyn Handler<S, P>>`).
///
/// Two handles refer to the same subscriber if they point to the same allocation.
pub type HandlerRef<S, P> = Arc<dyn Handler<S, P>>;

/// Event subscriber invoked with `(sender, payload)`.
pub trait Handler<S, P>: Send + Sync + 'static {
    /// Processes one fired event.
    ///
    /// Called on the publisher's thread. Keep it short: every subscriber after
    /// this one waits for it to return.
    fn handle(&self, sender: &S, payload: &P) -> Result<(), HandlerError>;

    /// Returns the subscriber name used in logs and failure reports.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Function-backed subscriber.
///
/// Wraps a closure `F: Fn(&S, &P) -> Result<(), HandlerError>`.
#[derive(Debug)]
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`].
    pub fn new<S, P>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&S, &P) -> Result<(), HandlerError>,
    {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the subscriber and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use eventline::{HandlerFn, HandlerRef};
    ///
    /// let h: HandlerRef<(), u32> = HandlerFn::arc("printer", |_: &(), n: &u32| {
    ///     println!("got {n}");
    ///     Ok(())
    /// });
    /// assert_eq!(h.name(), "printer");
    /// ```
    pub fn arc<S, P>(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self>
    where
        F: Fn(&S, &P) -> Result<(), HandlerError>,
    {
        Arc::new(Self::new(name, f))
    }
}

impl<S, P, F> Handler<S, P> for HandlerFn<F>
where
    F: Fn(&S, &P) -> Result<(), HandlerError> + Send + Sync + 'static,
{
    fn handle(&self, sender: &S, payload: &P) -> Result<(), HandlerError> {
        (self.f)(sender, payload)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unnamed;

    impl Handler<(), ()> for Unnamed {
        fn handle(&self, _: &(), _: &()) -> Result<(), HandlerError> {
            Ok(())
        }
    }

    #[test]
    fn test_default_name_is_type_name() {
        let h = Unnamed;
        assert!(Handler::<(), ()>::name(&h).ends_with("Unnamed"));
    }

    #[test]
    fn test_handler_fn_forwards_sender_and_payload() {
        let h: HandlerRef<u32, u32> = HandlerFn::arc("sum", |s: &u32, p: &u32| {
            if s + p == 5 {
                Ok(())
            } else {
                Err(HandlerError::failed("bad sum"))
            }
        });
        assert_eq!(h.handle(&2, &3), Ok(()));
        assert_eq!(h.handle(&2, &2), Err(HandlerError::failed("bad sum")));
    }
}
