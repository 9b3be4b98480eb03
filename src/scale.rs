//! Linear scaling of raw ADC samples

use crate::config::{ADC_MAX, ADC_MIN};

/// Maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Integer division truncates toward zero. Values outside the input range are
/// extrapolated, not clamped. A zero-width input range yields `out_min`.
/// Intermediates are 64-bit; a result beyond `i32` saturates.
pub const fn map(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    let mapped = (value as i64 - in_min as i64) * (out_max as i64 - out_min as i64)
        / (in_max as i64 - in_min as i64)
        + out_min as i64;

    if mapped > i32::MAX as i64 {
        i32::MAX
    } else if mapped < i32::MIN as i64 {
        i32::MIN
    } else {
        mapped as i32
    }
}

/// A 10-bit ADC sample, always within `ADC_MIN..=ADC_MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RawReading(u16);

impl RawReading {
    /// Wraps a sample, clamping anything above the ADC range.
    pub const fn new(value: u16) -> Self {
        if value > ADC_MAX {
            Self(ADC_MAX)
        } else {
            Self(value)
        }
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// Scales onto `[out_min, out_max]` across the full ADC domain.
    pub const fn scale(self, out_min: i32, out_max: i32) -> i32 {
        map(self.0 as i32, ADC_MIN as i32, ADC_MAX as i32, out_min, out_max)
    }

    /// 0..=100
    pub const fn percent(self) -> u8 {
        self.scale(0, 100) as u8
    }

    /// 0..=255, an 8-bit PWM duty
    pub const fn duty(self) -> u8 {
        self.scale(0, 255) as u8
    }
}

impl From<u16> for RawReading {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

/// Converts an 8-bit duty back into a 0..=100 percentage.
pub const fn duty_percent(duty: u8) -> u8 {
    map(duty as i32, 0, 255, 0, 100) as u8
}
