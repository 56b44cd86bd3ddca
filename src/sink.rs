// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::Level;
use std::fmt::Debug;
use std::io::Write;

/// A line-oriented log destination.
pub trait Sink: Debug {
    /**
    Receives one complete line.

    `line` holds the preamble and every appended token but no terminator; the sink writes
    whatever terminator it uses.  Failures are absorbed: a sink never reports that logging
    itself failed.
    */
    fn finish_line(&self, level: Level, line: &str);

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn flush(&self);
}

/**
Where a [`LogStatement`](crate::LogStatement) commits its line.

Macros accept anything that converts into a `Destination`: `&mut W` for any
[`std::io::Write`], or `&S` for any [`Sink`].
*/
pub enum Destination<'a> {
    /// The process-wide log file, opened on first use.
    SharedFile,
    /// A caller-supplied sink.
    Sink(&'a dyn Sink),
    /// A caller-supplied byte stream.
    Stream(&'a mut dyn Write),
}

impl Destination<'_> {
    /// Writes `line` followed by the terminator.  Errors are discarded.
    pub(crate) fn commit(self, level: Level, line: &str) {
        match self {
            Destination::SharedFile => crate::shared_file::shared_file().finish_line(level, line),
            Destination::Sink(sink) => sink.finish_line(level, line),
            Destination::Stream(stream) => {
                let _ = write_line(stream, line);
            }
        }
    }
}

/// `line`, the terminator, then a flush, the way `std::endl` terminates a line.
pub(crate) fn write_line<W: Write + ?Sized>(stream: &mut W, line: &str) -> std::io::Result<()> {
    stream.write_all(line.as_bytes())?;
    stream.write_all(b"\n")?;
    stream.flush()
}

impl Default for Destination<'_> {
    fn default() -> Self {
        Destination::SharedFile
    }
}

impl<'a, W: Write + 'a> From<&'a mut W> for Destination<'a> {
    fn from(stream: &'a mut W) -> Self {
        Destination::Stream(stream)
    }
}

impl<'a, S: Sink + 'a> From<&'a S> for Destination<'a> {
    fn from(sink: &'a S) -> Self {
        Destination::Sink(sink)
    }
}

impl Debug for Destination<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::SharedFile => f.write_str("SharedFile"),
            Destination::Sink(sink) => f.debug_tuple("Sink").field(sink).finish(),
            Destination::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/*
Boilerplate notes.

# Sink

Clone on a sink doesn't make sense, it usually owns a resource (a file handle, a buffer).
PartialEq/Eq/Hash: data equality or provenance?  Avoid.
Send/Sync: not required.  Destinations are used on the thread that logs.

# Destination

Not Clone, Stream holds a unique borrow.
Default is the shared file, which is what the level macros use when no destination is given.
*/
