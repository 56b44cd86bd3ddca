// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
The clock field of the preamble, `HH:MM:SS.mmm`.

The hour is the UTC hour of the day plus the timezone adjustment, with no wraparound: an
adjustment of `-5` at 02:00 UTC renders as `-3`.

The millisecond field is three digits wide but, unless the `full_millis` feature is enabled, only
holds the millisecond count modulo 100 (`12:00:00.345` renders as `12:00:00.045`).  Existing
consumers of these logs expect exactly that, so it is kept.
*/

use crate::sys::Duration;
use std::fmt::Write;

#[cfg(not(feature = "full_millis"))]
const MILLIS_MODULUS: u128 = 100;
#[cfg(feature = "full_millis")]
const MILLIS_MODULUS: u128 = 1000;

/// Writes the clock for `since_epoch` into `out`.
pub fn write_clock(out: &mut String, since_epoch: Duration, timezone_adjustment: i64) {
    let secs = since_epoch.as_secs();
    let hours = ((secs / 3600 % 24) as i64).saturating_add(timezone_adjustment);
    let minutes = secs / 60 % 60;
    let seconds = secs % 60;
    let millis = since_epoch.as_millis() % MILLIS_MODULUS;
    //writing into a String can't fail
    let _ = write!(out, "{hours:02}:{minutes:02}:{seconds:02}.{millis:03}");
}

/// The clock for `since_epoch` as a new string.
pub fn format_clock(since_epoch: Duration, timezone_adjustment: i64) -> String {
    let mut out = String::with_capacity(12);
    write_clock(&mut out, since_epoch, timezone_adjustment);
    out
}
