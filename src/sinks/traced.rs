//! # TracingSink — forwards status lines to `tracing`.

use tracing::{error, info, warn};

use crate::sinks::{StatusSink, Tone};

/// Sink that turns each line into a `tracing` event.
///
/// `Plain`/`Notice` map to `INFO`, `Warning` to `WARN`, `Alert` to `ERROR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl StatusSink for TracingSink {
    fn emit(&self, tone: Tone, line: &str) {
        match tone {
            Tone::Plain | Tone::Notice => info!(tone = tone.as_label(), "{line}"),
            Tone::Warning => warn!(tone = tone.as_label(), "{line}"),
            Tone::Alert => error!(tone = tone.as_label(), "{line}"),
        }
    }
}
