// SPDX-License-Identifier: MIT OR Apache-2.0

//! One log line.
//!
//! A [`LogStatement`] is created by a logging macro, collects tokens, and commits exactly one
//! line to its [`Destination`] when it goes out of scope.
//!
//! # Design
//!
//! The line is assembled in memory and committed in a single write when the statement drops.
//! The destination sees the same bytes it would see if every token were streamed straight
//! through, but a line is never split across writes, so lines from different threads do not
//! interleave.
//!
//! 1. Construction gates on the level.  An inactive statement holds no destination and an
//!    unallocated buffer; nothing else happens.
//! 2. An active statement writes the preamble:
//!    `[HH:MM:SS.mmm][Level][file.rs:line][path::to::function] `
//! 3. Tokens are appended with `<<`, [`LogStatement::append`] (what the macros' token lists
//!    expand to), or `write!` on the [`LineStream`].
//! 4. `Drop` commits the line and its terminator.
//!
//! ```rust
//! use linewise::{InMemorySink, log_error};
//!
//! let sink = InMemorySink::new();
//! let code = 404;
//! log_error!(&sink; "request failed: ", code);
//!
//! let logs = sink.drain_logs();
//! assert!(logs.contains("[Error]"));
//! assert!(logs.ends_with("] request failed: 404"));
//! ```

use crate::callsite::CallSite;
use crate::config::{ACTIVE_THRESHOLD, timezone_adjustment};
use crate::sink::Destination;
use crate::{Level, sys, timestamp};
use std::fmt::{Arguments, Display, Write};
use std::ops::Shl;

/**
The text of one line under construction.

This is the "raw stream" of a [`LogStatement`]: code that wants to write with `write!` rather
than chain `<<` gets it from [`LogStatement::stream`] or the `*_stream!` macros.  Writing to the
stream of an inactive statement does nothing.

`write!` resolves to the inherent [`LineStream::write_fmt`], which cannot fail, so there is no
`Result` to handle.  [`std::fmt::Write`] is implemented as well for code that is generic over
writers.
*/
#[derive(Debug)]
pub struct LineStream {
    line: Option<String>,
}

impl LineStream {
    fn inactive() -> Self {
        Self { line: None }
    }

    fn active() -> Self {
        Self {
            line: Some(String::with_capacity(128)),
        }
    }

    /// Whether writes are kept.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.line.is_some()
    }

    /// Appends one token.
    #[inline]
    pub fn append<T: Display>(&mut self, token: T) -> &mut Self {
        if let Some(line) = &mut self.line {
            //writing into a String can't fail
            let _ = write!(line, "{token}");
        }
        self
    }

    /// Appends formatted text.  This is what `write!(stream, ...)` calls.
    #[inline]
    pub fn write_fmt(&mut self, args: Arguments<'_>) {
        if let Some(line) = &mut self.line {
            let _ = line.write_fmt(args);
        }
    }

    /// Appends a string slice.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        if let Some(line) = &mut self.line {
            line.push_str(s);
        }
    }

    /// The line so far, without terminator.  Empty when inactive.
    pub fn as_str(&self) -> &str {
        self.line.as_deref().unwrap_or("")
    }
}

impl Write for LineStream {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        LineStream::write_str(self, s);
        Ok(())
    }
}

/**
One log line.

Created by the logging macros ([`log_info!`](crate::log_info) and friends).  Either active,
in which case it commits exactly one terminated line when dropped, or inactive, in which case
every operation is a no-op.  The state is decided at construction and never changes.

Not `Clone`, and not meant to be stored: it should live no longer than the statement or scope
that created it, since the line is only written when it drops.
*/
#[derive(Debug)]
pub struct LogStatement<'a> {
    level: Level,
    stream: LineStream,
    destination: Option<Destination<'a>>,
}

impl<'a> LogStatement<'a> {
    /**
    A statement gated at runtime against [`ACTIVE_THRESHOLD`].

    Prefer the macros, which decide the gate at compile time.  This constructor is for levels
    only known at runtime.
    */
    pub fn new(level: Level, destination: impl Into<Destination<'a>>, callsite: CallSite) -> Self {
        Self::with_threshold(ACTIVE_THRESHOLD, level, destination, callsite)
    }

    /**
    A statement gated against an explicit `threshold` instead of the build's.

    A below-threshold statement is inactive and the destination is dropped unused, so it is
    never opened, never timestamped and never written to.
    */
    pub fn with_threshold(
        threshold: Level,
        level: Level,
        destination: impl Into<Destination<'a>>,
        callsite: CallSite,
    ) -> Self {
        if level.is_active_at(threshold) {
            Self::begin(level, destination.into(), callsite)
        } else {
            Self::inactive(level)
        }
    }

    /// A statement that discards everything.
    #[inline]
    pub fn inactive(level: Level) -> Self {
        Self {
            level,
            stream: LineStream::inactive(),
            destination: None,
        }
    }

    /**
    An active statement; writes the preamble immediately.

    Callers are responsible for the level gate.
    */
    #[doc(hidden)]
    pub fn begin(level: Level, destination: Destination<'a>, callsite: CallSite) -> Self {
        let mut stream = LineStream::active();
        stream.write_str("[");
        if let Some(line) = &mut stream.line {
            timestamp::write_clock(line, sys::since_epoch(), timezone_adjustment());
        }
        stream.write_str("][");
        stream.write_str(level.label());
        stream.write_str("][");
        stream.write_str(callsite.file_name());
        stream.write_fmt(format_args!(":{}][", callsite.line));
        stream.write_str(callsite.function);
        stream.write_str("] ");
        Self {
            level,
            stream,
            destination: Some(destination),
        }
    }

    /**
    What the logging macros expand to.

    `active` is the compile-time gate.  The call site is only captured, and the preamble only
    written, when it holds.  Taking the destination as a plain argument keeps a temporary such
    as `&mut std::io::stderr()` alive until the end of the caller's statement.
    */
    #[doc(hidden)]
    #[inline]
    pub fn gated(
        active: bool,
        level: Level,
        destination: Destination<'a>,
        callsite: impl FnOnce() -> CallSite,
    ) -> Self {
        if active {
            Self::begin(level, destination, callsite())
        } else {
            Self::inactive(level)
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.destination.is_some()
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Appends one token.  Returns the statement for chaining.
    #[inline]
    pub fn append<T: Display>(&mut self, token: T) -> &mut Self {
        self.stream.append(token);
        self
    }

    /// The underlying line, for `write!` and other formatted writes.
    #[inline]
    pub fn stream(&mut self) -> &mut LineStream {
        &mut self.stream
    }
}

impl<T: Display> Shl<T> for LogStatement<'_> {
    type Output = Self;

    #[inline]
    fn shl(mut self, token: T) -> Self {
        self.stream.append(token);
        self
    }
}

impl Drop for LogStatement<'_> {
    fn drop(&mut self) {
        if let Some(destination) = self.destination.take() {
            destination.commit(self.level, self.stream.as_str());
        }
    }
}

/*
Boilerplate notes.

Clone/Copy: no.  A clone would commit a second line.
PartialEq, Ord, Hash: no meaningful comparison between lines in flight.
Default: no, a statement needs a level and a call site.
Display: the line is only interesting once committed.
*/
