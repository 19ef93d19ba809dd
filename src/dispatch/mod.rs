//! Event dispatch core.
//!
//! A publisher owns a [`Registry`] keyed by event identifiers. Subscribers
//! ([`Handler`]) are appended per identifier and invoked synchronously, in
//! registration order, every time the publisher fires that identifier.
//!
//! ## Contents
//! - [`Handler`], [`HandlerFn`], [`HandlerRef`] subscriber trait, closure adapter, shared handle
//! - [`Registry`] subscribe / unsubscribe / fire
//! - [`DispatchReport`], [`DispatchFailure`] per-fire outcome
//! - [`DispatchConfig`], [`FailurePolicy`] failure handling knobs
//!
//! ## Quick wiring
//! ```text
//! Publisher { events: Registry<Event, Publisher, Payload> }
//!      ├─► events.subscribe(Event::X, handler)     (listeners attach)
//!      └─► events.fire(Event::X, self, &payload)   (publisher notifies)
//! ```

mod config;
mod handler;
mod registry;
mod report;

pub use config::{DispatchConfig, FailurePolicy};
pub use handler::{Handler, HandlerFn, HandlerRef};
pub use registry::Registry;
pub use report::{DispatchFailure, DispatchReport};
