// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! [`InMemorySink`] captures lines in memory rather than writing them anywhere, making it
//! useful for:
//!
//! - Unit testing code that logs
//! - Programmatically examining log output
//! - Environments without a writable working directory (e.g. WASM in browsers)

use crate::Level;
use crate::sink::Sink;
use std::sync::{Mutex, PoisonError};

/// A sink that stores each line, with its level, in a `Vec`.
///
/// # Example
///
/// ```rust
/// use linewise::{InMemorySink, log_warning};
///
/// let sink = InMemorySink::new();
/// log_warning!(&sink; "disk ", "full");
///
/// let logs = sink.drain_logs();
/// assert!(logs.contains("[Warning]"));
/// assert!(logs.ends_with("disk full"));
/// ```
#[derive(Debug, Default)]
pub struct InMemorySink {
    lines: Mutex<Vec<(Level, String)>>,
}

// - Clone: NOT implemented - a clone would silently split the captured log in two
// - PartialEq/Eq/Hash: NOT implemented - comparing mutex contents is not meaningful
// - Default: derived, an empty buffer

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Drains all lines into a single string joined by `\n`, clearing the buffer.
    pub fn drain_logs(&self) -> String {
        self.drain_lines()
            .into_iter()
            .map(|(_, line)| line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drains all lines with their levels, oldest first, clearing the buffer.
    pub fn drain_lines(&self) -> Vec<(Level, String)> {
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *lines)
    }

    /// Number of lines currently held.
    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for InMemorySink {
    fn finish_line(&self, level: Level, line: &str) {
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        lines.push((level, line.to_string()));
    }

    fn flush(&self) {
        // No-op since we're storing in memory
    }
}
