//! # ConsoleSink — styled stdout printer
//!
//! Prints each line to stdout, coloured by [`Tone`] when styling is enabled.
//! Use it for demos.
//!
//! ## Colours
//! ```text
//! Plain   → default
//! Notice  → blue
//! Warning → yellow
//! Alert   → red
//! ```

use console::style;

use crate::sinks::{StatusSink, Tone};

/// Stdout sink.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    colors: bool,
}

impl ConsoleSink {
    /// Sink that follows the terminal's colour support.
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors: console::colors_enabled(),
        }
    }

    /// Sink that never styles its output.
    #[must_use]
    pub fn plain() -> Self {
        Self { colors: false }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for ConsoleSink {
    fn emit(&self, tone: Tone, line: &str) {
        if !self.colors {
            println!("{line}");
            return;
        }
        match tone {
            Tone::Plain => println!("{line}"),
            Tone::Notice => println!("{}", style(line).blue()),
            Tone::Warning => println!("{}", style(line).yellow()),
            Tone::Alert => println!("{}", style(line).red().bold()),
        }
    }
}
