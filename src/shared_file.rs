// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide log file.
//!
//! Lines logged without an explicit destination go to a single file named after the active
//! threshold (`Debug.log`, `Info.log`, ...) in the working directory, or to the name given to
//! [`set_log_file_name`](crate::set_log_file_name).
//!
//! # Lifecycle
//!
//! | State      | Entered by                                   | Lines                 |
//! |------------|----------------------------------------------|-----------------------|
//! | unopened   | process start                                | first one opens       |
//! | open       | first [`shared_file`] call, create+truncate  | appended              |
//! | failed     | the open failed                              | silently discarded    |
//! | closed     | [`close_shared_file`]                        | silently discarded    |
//!
//! The file is opened at most once per process, so it is truncated at most once.  A failed open
//! is not retried.  Nothing is reported when the file cannot be opened; logs simply do not appear.
//!
//! Only a line that passes the threshold ever reaches this module, so a call site below the
//! threshold never creates the file.
//!
//! # Flushing
//!
//! Every line is flushed as it is written.  [`close_shared_file`] is the teardown hook for hosts
//! that want the handle released before exit rather than during process teardown.

use crate::config::{ConfigError, default_log_file_name};
use crate::sink::write_line;
use crate::spinlock::Spinlock;
use crate::{Level, Sink};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

static SHARED: Spinlock<SharedState> = Spinlock::new(SharedState {
    name: None,
    file: FileState::Unopened,
});

struct SharedState {
    /// `None` until overridden; the default name is derived on demand.
    name: Option<PathBuf>,
    file: FileState,
}

enum FileState {
    Unopened,
    Open(File),
    Failed,
    Closed,
}

impl SharedState {
    fn name(&self) -> PathBuf {
        self.name.clone().unwrap_or_else(default_log_file_name)
    }

    fn open_if_needed(&mut self) -> Option<&mut File> {
        if let FileState::Unopened = self.file {
            self.file = match File::create(self.name()) {
                Ok(file) => FileState::Open(file),
                Err(_) => FileState::Failed,
            };
        }
        match &mut self.file {
            FileState::Open(file) => Some(file),
            _ => None,
        }
    }
}

/**
Returns the shared log file, opening it on the first call.

The first call creates (or truncates) the file.  Every later call returns a handle to the same
open file and never reopens it.
*/
pub fn shared_file() -> SharedFile {
    SHARED.with_mut(|state| {
        state.open_if_needed();
    });
    SharedFile { _private: () }
}

/// Flushes the shared log file, if it is open.
pub fn flush_shared_file() {
    SHARED.with_mut(|state| {
        if let FileState::Open(file) = &mut state.file {
            let _ = file.flush();
        }
    });
}

/**
Flushes and releases the shared log file.

Lines logged to the shared file afterwards are discarded; the file is not reopened, since that
would truncate it a second time.  Does nothing if the file was never opened.
*/
pub fn close_shared_file() {
    SHARED.with_mut(|state| {
        if let FileState::Open(file) = &mut state.file {
            let _ = file.flush();
            state.file = FileState::Closed;
        }
    });
}

pub(crate) fn file_name() -> PathBuf {
    SHARED.with_mut(|state| state.name())
}

pub(crate) fn set_file_name(name: PathBuf) -> Result<(), ConfigError> {
    SHARED.with_mut(|state| match state.file {
        FileState::Unopened => {
            state.name = Some(name);
            Ok(())
        }
        _ => Err(ConfigError::AlreadyOpened { path: state.name() }),
    })
}

/**
Handle to the process-wide log file.

Obtained from [`shared_file`].  It is a [`Sink`] for whole lines, and also implements
[`std::io::Write`] so arbitrary stream-writing code can target the same file.  Every write is a
no-op when the file could not be opened or has been closed.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SharedFile {
    _private: (),
}

impl SharedFile {
    /// Whether an open handle is currently held.
    pub fn is_open(&self) -> bool {
        SHARED.with_mut(|state| matches!(state.file, FileState::Open(_)))
    }
}

impl Sink for SharedFile {
    fn finish_line(&self, _level: Level, line: &str) {
        SHARED.with_mut(|state| {
            if let Some(file) = state.open_if_needed() {
                let _ = write_line(file, line);
            }
        });
    }

    fn flush(&self) {
        flush_shared_file();
    }
}

impl Write for SharedFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        SHARED.with_mut(|state| match state.open_if_needed() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        })
    }

    fn flush(&mut self) -> std::io::Result<()> {
        SHARED.with_mut(|state| match &mut state.file {
            FileState::Open(file) => file.flush(),
            _ => Ok(()),
        })
    }
}

/*
Boilerplate notes.

SharedFile is a zero-sized token for the one process-wide file, so all handles are equal.
Copy/Clone, Eq and Hash follow from that.  Default is not implemented, handles come from shared_file() so the
open happens exactly where the caller expects it.
*/
