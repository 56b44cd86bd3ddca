//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# linewise

linewise is a minimal line logger meant to be dropped into an application and forgotten about.

# The problem

Sometimes you don't want a logging *ecosystem*.  You want a file, one line per event, each line
saying when, how bad, and where, and you want the chatty lines to cost nothing at all in a
release build.

# The levels

| Name    | Usecase                            |
|---------|------------------------------------|
| Debug   | print-style debugging              |
| Info    | normal operation worth recording   |
| Warning | suspicious condition               |
| Error   | runtime error                      |

The minimum level that produces output, [`ACTIVE_THRESHOLD`], is fixed when the binary is
built: `Debug` in debug builds, `Info` in release builds, or whatever the `threshold_*` cargo
features select.  It never changes at runtime.  A call site below it compiles to nothing: no
clock read, no formatting, no file created.

# The API

```rust
# let _ = linewise::set_log_file_name(std::env::temp_dir().join("linewise-doc-api.log"));
let free_bytes = 0;
linewise::log_warning!(; "disk full, ", free_bytes, " bytes free");
```

writes a line like

```text
[14:03:27.045][Warning][main.rs:3][my_app::main] disk full, 0 bytes free
```

to `Debug.log` (or `Info.log`, after the threshold) in the working directory.  The file is
created, truncated, on the first line written and stays open for the life of the process.

Tokens of any [`Display`](std::fmt::Display) type follow a `;`, after the destination if there
is one.  Without tokens each macro yields a [`LogStatement`], which takes further tokens with
`<<`:

```rust
# let _ = linewise::set_log_file_name(std::env::temp_dir().join("linewise-doc-shl.log"));
let _ = linewise::log_info!() << "cache " << "warm";
```

Either way the line is terminated when the statement ends.  To write with `write!` instead,
bind a stream for the rest of the scope:

```rust
# let _ = linewise::set_log_file_name(std::env::temp_dir().join("linewise-doc-stream.log"));
# let entries = ["a", "b"];
linewise::info_stream!(out);
write!(out, "{} entries:", entries.len());
for entry in entries {
    write!(out, " {entry}");
}
// the line is written here, at the end of the scope
```

Any [`std::io::Write`] or [`Sink`] can stand in for the shared file:

```rust
let sink = linewise::InMemorySink::new();
linewise::log_error!(&sink; "lost connection");
linewise::log_error!(&mut std::io::stderr(); "lost connection");
assert!(sink.drain_logs().ends_with("] lost connection"));
```

# Errors

Logging never fails.  If the log file can't be opened, lines are silently discarded; there is
no channel for "logging itself failed".  The only fallible call is [`set_log_file_name`] after
the file is already open.

# Multithreading

There is no per-thread state.  Each line is committed in one write under a short spinlock, so
lines from different threads don't interleave, but their order across threads is whatever the
scheduler makes it.
*/

mod callsite;
mod config;
mod inmemory_sink;
mod level;
mod macros;
pub mod shared_file;
mod sink;
mod spinlock;
mod statement;
mod stderror_sink;
mod sys;
pub mod timestamp;

pub use callsite::{CallSite, trim_file_name};
pub use config::{
    ACTIVE_THRESHOLD, ConfigError, DEFAULT_TIMEZONE_ADJUSTMENT, default_log_file_name,
    log_file_name, set_log_file_name, set_timezone_adjustment, timezone_adjustment,
};
pub use inmemory_sink::InMemorySink;
pub use level::{Level, label_of};
pub use shared_file::{SharedFile, close_shared_file, flush_shared_file, shared_file};
pub use sink::{Destination, Sink};
pub use statement::{LineStream, LogStatement};
pub use stderror_sink::StderrSink;

#[doc(hidden)]
pub mod hidden {
    pub use crate::callsite::enclosing_function;
}
