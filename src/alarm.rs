//! Threshold alarm
//!
//! The comparison has no hysteresis. A noisy signal sitting on the threshold
//! makes the indicator and the on-screen text chatter between cycles.

use crate::scale::RawReading;

/// On iff `raw` is strictly above `threshold`.
#[inline]
pub const fn alarm_state(raw: RawReading, threshold: u16) -> bool {
    raw.get() > threshold
}
