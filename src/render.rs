//! Screen rendering
//!
//! Every screen puts the mode label on row 0 and the value on row 1. Values
//! are formatted with `ufmt`, floats by hand since `ufmt` has no float support.

use ufmt::{uWrite, uwrite};

use crate::alarm::alarm_state;
use crate::display::{CharDisplay, TextWriter, DEGREE_GLYPH};
use crate::mode::DisplayMode;
use crate::scale::duty_percent;
use crate::sensors::Snapshot;

/// Row 1 text when the screen's channel could not be sampled
pub const UNAVAILABLE_TEXT: &str = "Sensor N/A";

pub const ALARM_ON_TEXT: &str = "ALARM ON";
pub const ALARM_OFF_TEXT: &str = "ALARM OFF";

/// Clears the display and draws the screen selected by `mode`.
pub fn render<D: CharDisplay>(
    display: &mut D,
    mode: DisplayMode,
    snapshot: &Snapshot,
    alarm_threshold: u16,
) -> Result<(), D::Error> {
    display.clear()?;
    display.set_cursor(0, 0)?;
    display.write_str(mode.label())?;
    display.set_cursor(0, 1)?;

    match mode {
        DisplayMode::Temperature => match snapshot.climate.temperature {
            Ok(celsius) => write_celsius(display, celsius),
            Err(_) => display.write_str(UNAVAILABLE_TEXT),
        },
        DisplayMode::Humidity => match snapshot.climate.humidity {
            Ok(percent) => uwrite!(&mut TextWriter(display), "{} %", percent),
            Err(_) => display.write_str(UNAVAILABLE_TEXT),
        },
        DisplayMode::Magnetic => match snapshot.actuator {
            Ok(reading) => uwrite!(&mut TextWriter(display), "{} %", reading.magnetic_percent),
            Err(_) => display.write_str(UNAVAILABLE_TEXT),
        },
        DisplayMode::Wind => match snapshot.actuator {
            Ok(reading) => {
                let status = if alarm_state(reading.raw, alarm_threshold) {
                    ALARM_ON_TEXT
                } else {
                    ALARM_OFF_TEXT
                };
                uwrite!(
                    &mut TextWriter(display),
                    "{} %  {}",
                    duty_percent(reading.duty),
                    status
                )
            }
            Err(_) => display.write_str(UNAVAILABLE_TEXT),
        },
    }
}

/// Writes `value` with one decimal place, half rounded away from zero.
///
/// Small negatives keep their sign, so -0.04 prints as `-0.0`.
pub fn write_one_decimal<W: uWrite>(out: &mut W, value: f32) -> Result<(), W::Error> {
    let negative = value < 0.0;
    let magnitude = if negative { -value } else { value };
    let tenths = (magnitude * 10.0 + 0.5) as u32;

    if negative {
        out.write_str("-")?;
    }
    uwrite!(out, "{}.{}", tenths / 10, tenths % 10)
}

fn write_celsius<D: CharDisplay>(display: &mut D, celsius: f32) -> Result<(), D::Error> {
    write_one_decimal(&mut TextWriter(&mut *display), celsius)?;
    display.write_bytes(&[DEGREE_GLYPH])?;
    display.write_str("C")
}
