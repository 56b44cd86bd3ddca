// SPDX-License-Identifier: MIT OR Apache-2.0

//! The call-site surface.
//!
//! | Macro                                   | Yields                                  |
//! |-----------------------------------------|-----------------------------------------|
//! | [`log!`](crate::log)`(level[, dest])`   | a [`LogStatement`](crate::LogStatement) |
//! | `log_debug!`, `log_info!`, `log_warning!`, `log_error!` | the same, at a fixed level |
//! | [`log_stream!`](crate::log_stream)`(level, name[, dest])` | binds `name` to the line's [`LineStream`](crate::LineStream) until the end of the scope |
//! | `debug_stream!`, `info_stream!`, `warning_stream!`, `error_stream!` | the same, at a fixed level |
//!
//! Without a destination, lines go to the shared log file.  A destination is anything that
//! converts into a [`Destination`](crate::Destination): `&mut` any [`std::io::Write`], or `&` any
//! [`Sink`](crate::Sink).
//!
//! The level must be a constant.  It is compared against
//! [`ACTIVE_THRESHOLD`](crate::ACTIVE_THRESHOLD) in an inline `const { .. }` block, so a call
//! below the threshold yields an inactive statement: no clock read, no call-site capture, and no
//! file open.  The destination expression itself is still evaluated, but an inactive line never
//! touches it.  For a level only known at runtime use
//! [`LogStatement::new`](crate::LogStatement::new).
//!
//! Tokens can follow the destination after a `;`.  This form writes the whole line in one
//! statement:
//!
//! ```rust
//! # let _ = linewise::set_log_file_name(std::env::temp_dir().join("linewise-doc-tokens.log"));
//! let sink = linewise::InMemorySink::new();
//! let attempts = 3;
//! linewise::log_warning!(&sink; "gave up after ", attempts, " attempts");
//! linewise::log_info!(; "to the shared file");
//! assert!(sink.drain_logs().ends_with("] gave up after 3 attempts"));
//! ```
//!
//! A bare `log_info!() << token;` statement trips `unused_must_use`, as any unused `<<`
//! expression does.  Chains of `<<` read best bound to `_` or to a local that lives until the
//! line should end.

/**
Starts a log line at `level`.

```rust
use linewise::{InMemorySink, Level, log};

let sink = InMemorySink::new();
let _ = log!(Level::Error, &sink) << "code " << 7;
assert!(sink.drain_logs().ends_with("] code 7"));
```

The line is written when the statement ends, and the destination may be a temporary:

```rust
# use linewise::{Level, log};
let mut out: Vec<u8> = Vec::new();
log!(Level::Warning, &mut out; "disk ", "full");
log!(Level::Error, &mut std::io::sink(); "discarded");
let text = String::from_utf8(out).unwrap();
assert!(text.contains("[Warning]"));
assert!(text.ends_with("disk full\n"));
```
*/
#[macro_export]
macro_rules! log {
    ($level:expr) => {
        $crate::log!($level, $crate::Destination::SharedFile)
    };
    ($level:expr; $($token:expr),+ $(,)?) => {
        $crate::log!($level, $crate::Destination::SharedFile; $($token),+)
    };
    ($level:expr, $destination:expr) => {
        $crate::LogStatement::gated(
            const { $crate::Level::is_active($level) },
            $level,
            $crate::Destination::from($destination),
            || $crate::callsite!(),
        )
    };
    ($level:expr, $destination:expr; $($token:expr),+ $(,)?) => {{
        ($crate::log!($level, $destination))$(.append(&$token))+;
    }};
}

/// Starts a [`Level::Debug`](crate::Level::Debug) line.  See [`log!`](crate::log).
#[macro_export]
macro_rules! log_debug {
    () => {
        $crate::log!($crate::Level::Debug)
    };
    (; $($token:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Debug; $($token),+)
    };
    ($destination:expr) => {
        $crate::log!($crate::Level::Debug, $destination)
    };
    ($destination:expr; $($token:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Debug, $destination; $($token),+)
    };
}

/// Starts a [`Level::Info`](crate::Level::Info) line.  See [`log!`](crate::log).
#[macro_export]
macro_rules! log_info {
    () => {
        $crate::log!($crate::Level::Info)
    };
    (; $($token:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Info; $($token),+)
    };
    ($destination:expr) => {
        $crate::log!($crate::Level::Info, $destination)
    };
    ($destination:expr; $($token:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Info, $destination; $($token),+)
    };
}

/// Starts a [`Level::Warning`](crate::Level::Warning) line.  See [`log!`](crate::log).
#[macro_export]
macro_rules! log_warning {
    () => {
        $crate::log!($crate::Level::Warning)
    };
    (; $($token:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Warning; $($token),+)
    };
    ($destination:expr) => {
        $crate::log!($crate::Level::Warning, $destination)
    };
    ($destination:expr; $($token:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Warning, $destination; $($token),+)
    };
}

/// Starts a [`Level::Error`](crate::Level::Error) line.  See [`log!`](crate::log).
#[macro_export]
macro_rules! log_error {
    () => {
        $crate::log!($crate::Level::Error)
    };
    (; $($token:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Error; $($token),+)
    };
    ($destination:expr) => {
        $crate::log!($crate::Level::Error, $destination)
    };
    ($destination:expr; $($token:expr),+ $(,)?) => {
        $crate::log!($crate::Level::Error, $destination; $($token),+)
    };
}

/**
Binds `name` to a line's [`LineStream`](crate::LineStream) for the rest of the enclosing scope.

The line is terminated and committed when the scope ends, whichever way it is left.

```rust
use linewise::{InMemorySink, Level, log_stream};

let sink = InMemorySink::new();
for attempt in 1..=2 {
    log_stream!(Level::Info, out, &sink);
    write!(out, "attempt {attempt}");
    if attempt == 1 {
        continue;
    }
    out.append(", last");
}
assert_eq!(sink.len(), 2);
assert!(sink.drain_logs().ends_with("] attempt 2, last"));
```

Several streams in one scope are committed in reverse order of declaration, like any other
locals.  Since the line outlives the macro's own statement, the destination must too; below the
threshold the destination expression is not evaluated at all.
*/
#[macro_export]
macro_rules! log_stream {
    ($level:expr, $name:ident) => {
        $crate::log_stream!($level, $name, $crate::Destination::SharedFile);
    };
    ($level:expr, $name:ident, $destination:expr) => {
        let mut __linewise_statement = if const { $crate::Level::is_active($level) } {
            $crate::LogStatement::begin(
                $level,
                $crate::Destination::from($destination),
                $crate::callsite!(),
            )
        } else {
            $crate::LogStatement::inactive($level)
        };
        let $name = __linewise_statement.stream();
    };
}

/// [`log_stream!`](crate::log_stream) at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug_stream {
    ($name:ident) => {
        $crate::log_stream!($crate::Level::Debug, $name);
    };
    ($name:ident, $destination:expr) => {
        $crate::log_stream!($crate::Level::Debug, $name, $destination);
    };
}

/// [`log_stream!`](crate::log_stream) at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info_stream {
    ($name:ident) => {
        $crate::log_stream!($crate::Level::Info, $name);
    };
    ($name:ident, $destination:expr) => {
        $crate::log_stream!($crate::Level::Info, $name, $destination);
    };
}

/// [`log_stream!`](crate::log_stream) at [`Level::Warning`](crate::Level::Warning).
#[macro_export]
macro_rules! warning_stream {
    ($name:ident) => {
        $crate::log_stream!($crate::Level::Warning, $name);
    };
    ($name:ident, $destination:expr) => {
        $crate::log_stream!($crate::Level::Warning, $name, $destination);
    };
}

/// [`log_stream!`](crate::log_stream) at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error_stream {
    ($name:ident) => {
        $crate::log_stream!($crate::Level::Error, $name);
    };
    ($name:ident, $destination:expr) => {
        $crate::log_stream!($crate::Level::Error, $name, $destination);
    };
}

#[cfg(test)]
mod tests {
    use crate::{InMemorySink, Level};

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn level_macros_tag_lines() {
        let sink = InMemorySink::new();
        log_info!(&sink; "i");
        log_warning!(&sink; "w");
        log_error!(&sink; "e");

        let lines = sink.drain_lines();
        let levels: Vec<Level> = lines.iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, vec![Level::Info, Level::Warning, Level::Error]);
        assert!(lines[0].1.contains("][Info][macros.rs:"));
        assert!(lines[1].1.contains("[Warning]"));
        assert!(lines[2].1.ends_with("] e"));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn preamble_names_this_function() {
        let sink = InMemorySink::new();
        let line = line!() + 1;
        log_error!(&sink; "here");
        let logs = sink.drain_logs();
        assert!(logs.contains(&format!(
            "[macros.rs:{line}][linewise::macros::tests::preamble_names_this_function] here"
        )));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn debug_follows_threshold() {
        let sink = InMemorySink::new();
        let statement = log_debug!(&sink);
        assert_eq!(statement.is_active(), Level::Debug.is_active());
        drop(statement << "maybe");
        log_debug!(&sink; "maybe", 2);
        assert_eq!(sink.len(), 2 * usize::from(Level::Debug.is_active()));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn stream_lives_until_scope_end() {
        let sink = InMemorySink::new();
        {
            warning_stream!(out, &sink);
            write!(out, "{}", 1);
            assert!(sink.is_empty());
            write!(out, "{}", 2);
        }
        assert!(
            sink.drain_logs()
                .ends_with("[linewise::macros::tests::stream_lives_until_scope_end] 12")
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn stream_terminates_on_early_return() {
        fn work(sink: &InMemorySink, fail: bool) -> Result<(), &'static str> {
            error_stream!(out, sink);
            write!(out, "working");
            if fail {
                return Err("failed");
            }
            out.append(", finished");
            Ok(())
        }
        let sink = InMemorySink::new();
        assert!(work(&sink, true).is_err());
        assert!(work(&sink, false).is_ok());
        let lines = sink.drain_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].1.ends_with("] working"));
        assert!(lines[1].1.ends_with("] working, finished"));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn io_destination_gets_terminator() {
        let mut out: Vec<u8> = Vec::new();
        log_info!(&mut out; "one");
        let _ = log_info!(&mut out) << "two";
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] one"));
        assert!(lines[1].ends_with("] two"));
        assert!(text.ends_with('\n'));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn temporary_destinations_live_to_the_end_of_the_statement() {
        let _ = log_error!(&mut std::io::sink()) << "to a temporary stream";
        log_error!(&mut std::io::sink(); "token ", 1);
        log!(Level::Warning, &mut Vec::<u8>::new(); "into a scratch buffer");

        let mut out: Vec<u8> = Vec::new();
        log_error!(&mut std::io::Cursor::new(&mut out); "through a temporary cursor");
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("] through a temporary cursor\n"));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn token_lists_borrow_their_tokens() {
        let sink = InMemorySink::new();
        let user = String::from("ada");
        let attempts = 3;
        log_warning!(&sink; "user ", user, " failed ", attempts, " times",);
        log_info!(&sink; user);
        let lines = sink.drain_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].1.ends_with("] user ada failed 3 times"));
        assert!(lines[1].1.ends_with("] ada"));
        assert_eq!(user, "ada");
    }
}
