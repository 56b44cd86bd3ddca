// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform-specific clock types.
//!
//! On native platforms these come from `std::time`, while on WASM, where `std::time::SystemTime`
//! panics, they come from `web_time`.

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, SystemTime, UNIX_EPOCH};
#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, SystemTime, UNIX_EPOCH};

/// Wall-clock time since the Unix epoch.  A clock set before 1970 reads as the epoch itself.
pub fn since_epoch() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
}
