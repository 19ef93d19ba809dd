//! # Status sink trait.
//!
//! Publishers and listeners in the bundled scenarios never print directly;
//! they hand formatted lines to a [`StatusSink`].

use std::sync::Arc;

/// Severity/colour hint attached to a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    /// Ordinary progress output.
    #[default]
    Plain,
    /// Informational state change (e.g. back to normal).
    Notice,
    /// Something needs attention.
    Warning,
    /// Something is wrong right now.
    Alert,
}

impl Tone {
    /// Returns a short stable label for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Tone::Plain => "plain",
            Tone::Notice => "notice",
            Tone::Warning => "warning",
            Tone::Alert => "alert",
        }
    }
}

/// Destination for human-readable status lines.
///
/// Implementations must be cheap and must not panic; they are called from
/// inside event handlers.
pub trait StatusSink: Send + Sync + 'static {
    /// Writes one line.
    fn emit(&self, tone: Tone, line: &str);

    /// Writes one [`Tone::Plain`] line.
    fn plain(&self, line: &str) {
        self.emit(Tone::Plain, line);
    }
}

/// Shared sink handle.
pub type SinkRef = Arc<dyn StatusSink>;
