#![allow(dead_code)]

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal::PwmPin;

use weather_station::display::{CharDisplay, DEGREE_GLYPH};
use weather_station::error::SensorError;
use weather_station::sensors::{AnalogSource, SensorChannel};
use weather_station::RawReading;

/// Two-row screen that keeps what was written since the last clear
#[derive(Default)]
pub struct FakeDisplay {
    rows: [Vec<u8>; 2],
    row: usize,
    pub clears: usize,
    pub fail: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusFault;

impl FakeDisplay {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Row text with the degree glyph shown as `°`
    pub fn row(&self, row: usize) -> String {
        self.rows[row]
            .iter()
            .map(|&b| if b == DEGREE_GLYPH { '°' } else { b as char })
            .collect()
    }
}

impl CharDisplay for FakeDisplay {
    type Error = BusFault;

    fn clear(&mut self) -> Result<(), BusFault> {
        if self.fail {
            return Err(BusFault);
        }
        self.rows = Default::default();
        self.row = 0;
        self.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, _column: u8, row: u8) -> Result<(), BusFault> {
        self.row = row as usize;
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BusFault> {
        self.rows[self.row].extend_from_slice(bytes);
        Ok(())
    }
}

/// 8-bit PWM channel
#[derive(Default)]
pub struct FakePwm {
    pub duty: u8,
    pub enabled: bool,
}

impl PwmPin for FakePwm {
    type Duty = u8;

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn get_duty(&self) -> u8 {
        self.duty
    }

    fn get_max_duty(&self) -> u8 {
        u8::MAX
    }

    fn set_duty(&mut self, duty: u8) {
        self.duty = duty;
    }
}

/// Records every requested pause instead of sleeping
#[derive(Default)]
pub struct RecordingDelay {
    pub ms: Vec<u32>,
    pub us: Vec<u32>,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u32 {
        self.ms.iter().sum()
    }
}

impl DelayMs<u16> for RecordingDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.ms.push(ms as u32);
    }
}

impl DelayUs<u16> for RecordingDelay {
    fn delay_us(&mut self, us: u16) {
        self.us.push(us as u32);
    }
}

/// Fixed samples per channel; `None` reads as unavailable
#[derive(Clone, Copy, Default)]
pub struct FixedSource {
    pub temperature: Option<u16>,
    pub humidity: Option<u16>,
    pub actuator: Option<u16>,
}

impl FixedSource {
    pub fn new(temperature: u16, humidity: u16, actuator: u16) -> Self {
        Self {
            temperature: Some(temperature),
            humidity: Some(humidity),
            actuator: Some(actuator),
        }
    }
}

impl AnalogSource for FixedSource {
    fn read_raw(&mut self, channel: SensorChannel) -> Result<RawReading, SensorError> {
        let value = match channel {
            SensorChannel::Temperature => self.temperature,
            SensorChannel::Humidity => self.humidity,
            SensorChannel::Actuator => self.actuator,
        };
        value
            .map(RawReading::new)
            .ok_or(SensorError::Unavailable(channel))
    }
}

/// Button that replays a press pattern, then reads released
pub struct ScriptedButton {
    presses: Vec<bool>,
    next: std::cell::Cell<usize>,
}

impl ScriptedButton {
    pub fn new(presses: &[bool]) -> Self {
        Self {
            presses: presses.to_vec(),
            next: std::cell::Cell::new(0),
        }
    }
}

impl InputPin for ScriptedButton {
    type Error = core::convert::Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        let i = self.next.get();
        self.next.set(i + 1);
        Ok(self.presses.get(i).copied().unwrap_or(false))
    }
}

/// Pin whose every access fails
pub struct BrokenPin;

impl InputPin for BrokenPin {
    type Error = ();

    fn is_high(&self) -> Result<bool, ()> {
        Err(())
    }

    fn is_low(&self) -> Result<bool, ()> {
        Err(())
    }
}

/// Output pin that only remembers its level
#[derive(Default)]
pub struct LevelPin {
    pub high: bool,
}

impl OutputPin for LevelPin {
    type Error = core::convert::Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}
