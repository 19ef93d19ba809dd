//! # MemorySink — records lines instead of printing them.

use std::sync::{Mutex, PoisonError};

use crate::sinks::{StatusSink, Tone};

/// In-memory sink; useful for tests and for embedding scenarios in other programs.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Tone, String)>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded line with its tone, oldest first.
    pub fn entries(&self) -> Vec<(Tone, String)> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns every recorded line without tones, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, line)| line).collect()
    }

    /// Drops everything recorded so far.
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl StatusSink for MemorySink {
    fn emit(&self, tone: Tone, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((tone, line.to_string()));
    }
}
