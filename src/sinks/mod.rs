//! # Status sinks.
//!
//! Publishers and listeners write human-readable status lines through the
//! [`StatusSink`] trait; where those lines end up is the caller's choice.
//!
//! ## Built-in sinks
//! - [`ConsoleSink`] styled stdout output _(feature `console`)_
//! - [`TracingSink`] `tracing` events at a level derived from the [`Tone`]
//! - [`MemorySink`] recorded lines for tests

mod memory;
mod sink;
#[cfg(feature = "console")]
mod stdout;
mod traced;

#[cfg(feature = "console")]
pub use stdout::ConsoleSink;
pub use memory::MemorySink;
pub use sink::{SinkRef, StatusSink, Tone};
pub use traced::TracingSink;
