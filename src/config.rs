// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build-time and startup configuration.
//!
//! linewise is configured almost entirely when the binary is compiled:
//!
//! | Setting              | How to set it                                                       |
//! |----------------------|---------------------------------------------------------------------|
//! | active threshold     | cargo features `threshold_debug` .. `threshold_error`; otherwise `Debug` in debug builds and `Info` in release builds |
//! | timezone adjustment  | `LINEWISE_TIMEZONE_ADJUSTMENT` in the build environment, or [`set_timezone_adjustment`] at runtime |
//! | log file name        | `<threshold label>.log`, or [`set_log_file_name`] before the first line is written |
//! | millisecond field    | cargo feature `full_millis`                                         |
//!
//! The threshold can never change at runtime.  A call site below it compiles to nothing.

use crate::Level;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, Ordering};

/// The minimum level that produces output in this build.
pub const ACTIVE_THRESHOLD: Level = if cfg!(feature = "threshold_debug") {
    Level::Debug
} else if cfg!(feature = "threshold_info") {
    Level::Info
} else if cfg!(feature = "threshold_warning") {
    Level::Warning
} else if cfg!(feature = "threshold_error") {
    Level::Error
} else if cfg!(debug_assertions) {
    Level::Debug
} else {
    Level::Info
};

/// Hours added to the hour field of every timestamp unless overridden at runtime.
pub const DEFAULT_TIMEZONE_ADJUSTMENT: i64 = match option_env!("LINEWISE_TIMEZONE_ADJUSTMENT") {
    Some(hours) => parse_hours(hours),
    None => 0,
};

static TIMEZONE_ADJUSTMENT: AtomicI64 = AtomicI64::new(DEFAULT_TIMEZONE_ADJUSTMENT);

const fn parse_hours(text: &str) -> i64 {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        panic!("LINEWISE_TIMEZONE_ADJUSTMENT is empty");
    }
    let (negative, mut i) = match bytes[0] {
        b'-' => (true, 1),
        b'+' => (false, 1),
        _ => (false, 0),
    };
    if i == bytes.len() {
        panic!("LINEWISE_TIMEZONE_ADJUSTMENT has no digits");
    }
    let mut hours: i64 = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            panic!("LINEWISE_TIMEZONE_ADJUSTMENT must be a signed integer number of hours");
        }
        hours = hours * 10 + (digit - b'0') as i64;
        if hours > 24 * 365 {
            panic!("LINEWISE_TIMEZONE_ADJUSTMENT is out of range");
        }
        i += 1;
    }
    if negative { -hours } else { hours }
}

/// The timezone adjustment, in hours, currently applied to timestamps.
pub fn timezone_adjustment() -> i64 {
    TIMEZONE_ADJUSTMENT.load(Ordering::Relaxed)
}

/**
Replaces the timezone adjustment.

The adjustment is simply added to the hour field; it does not wrap around midnight.
*/
pub fn set_timezone_adjustment(hours: i64) {
    TIMEZONE_ADJUSTMENT.store(hours, Ordering::Relaxed);
}

/// `<label(ACTIVE_THRESHOLD)>.log`, e.g. `Info.log`.
pub fn default_log_file_name() -> PathBuf {
    PathBuf::from(format!("{}.log", ACTIVE_THRESHOLD.label()))
}

/// The file the shared sink opens, or has opened.
pub fn log_file_name() -> PathBuf {
    crate::shared_file::file_name()
}

/**
Overrides the shared log file's name.

Must be called before the first line reaches the shared file.  Once the file is open the name is
fixed for the rest of the process and this returns [`ConfigError::AlreadyOpened`].
*/
pub fn set_log_file_name(name: impl Into<PathBuf>) -> Result<(), ConfigError> {
    crate::shared_file::set_file_name(name.into())
}

/// Configuration rejected at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The shared log file was already opened under this name.
    AlreadyOpened { path: PathBuf },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::AlreadyOpened { path } => {
                write!(f, "log file {} is already open", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn hours_parse() {
        assert_eq!(parse_hours("0"), 0);
        assert_eq!(parse_hours("3"), 3);
        assert_eq!(parse_hours("+10"), 10);
        assert_eq!(parse_hours("-5"), -5);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    #[should_panic]
    fn hours_reject_garbage() {
        parse_hours("five");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn default_name_follows_threshold() {
        let name = default_log_file_name();
        assert_eq!(name, PathBuf::from(format!("{}.log", ACTIVE_THRESHOLD)));
        if cfg!(debug_assertions)
            && !cfg!(feature = "threshold_info")
            && !cfg!(feature = "threshold_warning")
            && !cfg!(feature = "threshold_error")
        {
            assert_eq!(name, PathBuf::from("Debug.log"));
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn timezone_override() {
        assert_eq!(timezone_adjustment(), DEFAULT_TIMEZONE_ADJUSTMENT);
        set_timezone_adjustment(-7);
        assert_eq!(timezone_adjustment(), -7);
        set_timezone_adjustment(DEFAULT_TIMEZONE_ADJUSTMENT);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn config_error_displays_path() {
        let err = ConfigError::AlreadyOpened { path: PathBuf::from("Info.log") };
        assert_eq!(err.to_string(), "log file Info.log is already open");
    }
}
