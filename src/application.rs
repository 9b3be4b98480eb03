//! Application layer: the sample → derive → actuate → render cycle

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal::PwmPin;

use crate::alarm::alarm_state;
use crate::config::StationConfig;
use crate::display::CharDisplay;
use crate::drivers::{AlarmLed, ButtonHandler, MotorController};
use crate::error::StationError;
use crate::mode::DisplayMode;
use crate::render::render;
use crate::sensors::{acquire_climate, derive_actuator, AnalogSource, Snapshot};

/// What one cycle observed and did
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleReport {
    /// Zero-based index of the cycle, wrapping
    pub cycle: u32,
    /// Screen that was rendered
    pub mode: DisplayMode,
    /// Whether a button press advanced the mode this cycle
    pub mode_changed: bool,
    pub snapshot: Snapshot,
    /// Duty written to the motor
    pub duty: u8,
    /// Level written to the alarm indicator
    pub alarm: bool,
}

/// Station state and the hardware it drives
///
/// The display mode is the only state carried from one cycle to the next.
pub struct Station<S, B, L, M, D, T> {
    sensors: S,
    button: ButtonHandler<B>,
    alarm: AlarmLed<L>,
    motor: MotorController<M>,
    display: D,
    delay: T,
    config: StationConfig,
    mode: DisplayMode,
    cycles: u32,
}

impl<S, B, L, M, D, T> Station<S, B, L, M, D, T>
where
    S: AnalogSource,
    B: InputPin,
    L: OutputPin,
    M: PwmPin,
    M::Duty: Copy + Into<u32> + TryFrom<u32>,
    D: CharDisplay,
    T: DelayMs<u16>,
{
    pub fn new(
        sensors: S,
        button: ButtonHandler<B>,
        alarm: AlarmLed<L>,
        motor: MotorController<M>,
        display: D,
        delay: T,
        config: StationConfig,
    ) -> Self {
        Self {
            sensors,
            button,
            alarm,
            motor,
            display,
            delay,
            config,
            mode: DisplayMode::default(),
            cycles: 0,
        }
    }

    /// Shows the start-up banner and holds it for `boot_banner_ms`.
    pub fn boot(&mut self) -> Result<(), StationError<D::Error>> {
        self.display.clear()?;
        self.display.set_cursor(0, 0)?;
        self.display.write_str("Weather station")?;
        self.display.set_cursor(0, 1)?;
        self.display.write_str("Init...")?;
        self.delay.delay_ms(self.config.boot_banner_ms);
        Ok(())
    }

    /// Runs one full cycle, including the closing inter-cycle pause.
    pub fn cycle(&mut self) -> Result<CycleReport, StationError<D::Error>> {
        let climate = acquire_climate(&mut self.sensors, &self.config);
        let mode_changed = self.poll_button()?;
        let actuator = derive_actuator(&mut self.sensors);

        // an unreadable actuator channel stops the motor and clears the alarm
        let (duty, alarm) = match actuator {
            Ok(reading) => (
                reading.duty,
                alarm_state(reading.raw, self.config.alarm_threshold),
            ),
            Err(_) => (0, false),
        };
        self.motor.set_duty(duty);
        self.alarm.set(alarm).map_err(|_| StationError::Pin)?;

        let snapshot = Snapshot { climate, actuator };
        render(
            &mut self.display,
            self.mode,
            &snapshot,
            self.config.alarm_threshold,
        )?;

        let report = CycleReport {
            cycle: self.cycles,
            mode: self.mode,
            mode_changed,
            snapshot,
            duty,
            alarm,
        };

        self.delay.delay_ms(self.config.cycle_delay_ms);
        self.cycles = self.cycles.wrapping_add(1);
        Ok(report)
    }

    /// Advances the mode on a pressed button, then waits out the debounce
    /// window so one press cannot be seen twice.
    fn poll_button(&mut self) -> Result<bool, StationError<D::Error>> {
        let pressed = self.button.is_pressed().map_err(|_| StationError::Pin)?;
        self.mode = self.mode.step(pressed);
        if pressed {
            self.delay.delay_ms(self.config.debounce_ms);
        }
        Ok(pressed)
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Cycles completed so far, wrapping
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn motor(&self) -> &MotorController<M> {
        &self.motor
    }

    pub fn alarm(&self) -> &AlarmLed<L> {
        &self.alarm
    }

    pub fn delay(&self) -> &T {
        &self.delay
    }
}
