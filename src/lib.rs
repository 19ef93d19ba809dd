//! # eventline
//!
//! **eventline** is a small, typed, synchronous event-dispatch core for the
//! observer pattern, plus three console scenarios built on it.
//!
//! A publisher owns a [`Registry`] mapping event identifiers to ordered lists
//! of subscribers. Firing an identifier calls every subscriber registered
//! under it, in registration order, on the calling thread.
//!
//! ## Architecture
//! ```text
//!   ┌──────────────────────────────────────────────────────────┐
//!   │  Publisher (DownloadManager / VideoEncoder / HeatSensor) │
//!   │    events: Registry<EventId, Publisher, Payload>         │
//!   └───────┬──────────────────────────────────────────────────┘
//!           │ fire(id, self, &payload)
//!           ▼
//!   ┌───────────────────────────────────────┐
//!   │ Registry                              │
//!   │   id ─► [h1, h2, h3, ...] (snapshot)  │
//!   └───┬───────────┬───────────┬───────────┘
//!       ▼           ▼           ▼
//!   h1.handle   h2.handle   h3.handle      (in order, same thread)
//!       │           │           │
//!       └───────────┴─────┬─────┘
//!                         ▼
//!                  DispatchReport { invoked, skipped, failures }
//! ```
//!
//! ## Features
//! | Area              | Description                                             | Key types / traits                          |
//! |-------------------|---------------------------------------------------------|---------------------------------------------|
//! | **Dispatch**      | Subscribe, unsubscribe and fire by event identifier.    | [`Registry`], [`Handler`], [`HandlerFn`]    |
//! | **Failures**      | Continue-on-failure by default, panics caught.          | [`DispatchReport`], [`FailurePolicy`]       |
//! | **Errors**        | Typed errors for subscribers and scenarios.             | [`HandlerError`], [`FailureCause`]          |
//! | **Sinks**         | Where status lines go.                                  | [`StatusSink`], [`MemorySink`], [`TracingSink`] |
//! | **Scenarios**     | Download, video encoding and thermostat publishers.     | [`scenarios`]                               |
//!
//! ## Optional features
//! - `console` _(default)_: exports [`ConsoleSink`], a styled stdout sink used by the demos.
//!
//! ## Example
//! ```rust
//! use eventline::{HandlerError, Registry};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Download { Start, Progress, End }
//!
//! struct Manager;
//!
//! let events: Registry<Download, Manager, String> = Registry::new();
//! let progress = events.subscribe_fn(Download::Progress, "printer", |_: &Manager, url: &String| {
//!     println!("downloading {url}");
//!     Ok::<_, HandlerError>(())
//! });
//!
//! let report = events.fire(Download::Progress, &Manager, &"http://x/main.csv".to_string());
//! assert_eq!(report.invoked, 1);
//!
//! events.unsubscribe(&Download::Progress, &progress);
//! assert!(events.fire(Download::Progress, &Manager, &String::new()).is_empty());
//! ```
mod dispatch;
mod error;
mod signal;
mod sinks;

pub mod scenarios;

// ---- Public re-exports ----

pub use dispatch::{
    DispatchConfig, DispatchFailure, DispatchReport, FailurePolicy, Handler, HandlerFn,
    HandlerRef, Registry,
};
pub use error::{DownloadError, FailureCause, HandlerError};
pub use signal::cancel_on_signal;
pub use sinks::{MemorySink, SinkRef, StatusSink, Tone, TracingSink};

#[cfg(feature = "console")]
pub use sinks::ConsoleSink;
