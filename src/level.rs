// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::config::ACTIVE_THRESHOLD;
use std::fmt::Display;

/// Severity of a log line.
///
/// The order is fixed: `Debug < Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// Print-style debugging, usually compiled out of release builds
    Debug = 0,
    /// Normal operation worth recording
    Info = 1,
    /// Suspicious condition
    Warning = 2,
    /// Runtime error
    Error = 3,
}

impl Level {
    /// All levels, least to most severe.
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warning, Level::Error];

    /**
    Whether lines at this level are written under the build's [`ACTIVE_THRESHOLD`].

    This is a `const fn`.  The logging macros evaluate it in a `const` block, so a call site
    below the threshold is resolved during compilation and emits no code at all.
    */
    #[inline]
    pub const fn is_active(self) -> bool {
        self.is_active_at(ACTIVE_THRESHOLD)
    }

    /// Whether lines at this level pass an explicit `threshold`.
    #[inline]
    pub const fn is_active_at(self, threshold: Level) -> bool {
        self as u8 >= threshold as u8
    }

    /// The fixed human-readable name written into the preamble.
    pub const fn label(self) -> &'static str {
        match self {
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warning => "Warning",
            Level::Error => "Error",
        }
    }
}

/**
Maps a raw level value to its label.

Values outside the four levels map to `"Unknown"`.
*/
pub const fn label_of(raw: u8) -> &'static str {
    match raw {
        0 => Level::Debug.label(),
        1 => Level::Info.label(),
        2 => Level::Warning.label(),
        3 => Level::Error.label(),
        _ => "Unknown",
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Level {
    /// The rejected value.
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, u8> {
        match raw {
            0 => Ok(Level::Debug),
            1 => Ok(Level::Info),
            2 => Ok(Level::Warning),
            3 => Ok(Level::Error),
            other => Err(other),
        }
    }
}

/*
Boilerplate notes.

Copy/Clone, Eq, Ord, Hash are derived; the order is the severity order.
Default is not implemented, no level is more "default" than another and ACTIVE_THRESHOLD already names the build's choice.
Display writes the label.
From<Level> for u8 is not implemented, `as u8` already works because of repr(u8).  TryFrom<u8> goes the other way.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn labels_are_stable() {
        assert_eq!(Level::Debug.label(), "Debug");
        assert_eq!(Level::Info.label(), "Info");
        assert_eq!(Level::Warning.label(), "Warning");
        assert_eq!(Level::Error.label(), "Error");
        assert_eq!(Level::Warning.to_string(), "Warning");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn raw_labels_are_total() {
        for level in Level::ALL {
            assert_eq!(label_of(level as u8), level.label());
        }
        assert_eq!(label_of(4), "Unknown");
        assert_eq!(label_of(u8::MAX), "Unknown");
        assert_eq!(Level::try_from(2), Ok(Level::Warning));
        assert_eq!(Level::try_from(9), Err(9));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn order_gates_activation() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);

        assert!(!Level::Debug.is_active_at(Level::Info));
        assert!(Level::Info.is_active_at(Level::Info));
        assert!(Level::Error.is_active_at(Level::Info));
        assert!(!Level::Warning.is_active_at(Level::Error));

        for level in Level::ALL {
            assert_eq!(level.is_active(), level >= ACTIVE_THRESHOLD);
        }
        // the top level always passes
        assert!(Level::Error.is_active());
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn activation_is_const() {
        const ERROR_ACTIVE: bool = Level::Error.is_active();
        assert!(ERROR_ACTIVE);
    }
}
