//! Configuration constants for the weather station firmware
//!
//! Pin assignment (Arduino Uno numbering):
//! - `A0` / `PC0`: TMP36 temperature sensor
//! - `A1` / `PC1`: humidity potentiometer
//! - `A2` / `PC2`: magnetic field / wind potentiometer
//! - `D2` / `PD2`: mode button, internal pull-up, active low
//! - `D8` / `PB0`: alarm LED
//! - `D9` / `PB1`: motor PWM (`OC1A`)
//! - `A4`/`A5`: I2C to the LCD backpack

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate of the diagnostic console
pub const UART_BAUD: u32 = 9600;

/// Lowest value the 10-bit ADC can produce
pub const ADC_MIN: u16 = 0;

/// Highest value the 10-bit ADC can produce
pub const ADC_MAX: u16 = 1023;

/// ADC reference (AVCC) in volts
pub const SUPPLY_VOLTS: f32 = 5.0;

/// TMP36 output at 0 °C
pub const SENSOR_ZERO_OFFSET_VOLTS: f32 = 0.5;

/// TMP36 sensitivity, 10 mV/°C
pub const SENSOR_SCALE_C_PER_VOLT: f32 = 100.0;

/// Raw actuator reading above which the alarm is on
pub const ALARM_THRESHOLD: u16 = 700;

/// Blocking pause after an accepted button press
pub const BUTTON_DEBOUNCE_MS: u16 = 300;

/// Pause at the end of every cycle
pub const CYCLE_DELAY_MS: u16 = 150;

/// How long the boot banner stays on screen
pub const BOOT_BANNER_MS: u16 = 1500;

/// 7-bit I2C address of the PCF8574 LCD backpack
pub const LCD_I2C_ADDR: u8 = 0x27;

pub const LCD_COLUMNS: u8 = 16;
pub const LCD_ROWS: u8 = 2;

/// Tunable station parameters, defaulting to the constants above.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StationConfig {
    pub supply_volts: f32,
    pub zero_offset_volts: f32,
    pub scale_c_per_volt: f32,
    pub alarm_threshold: u16,
    pub debounce_ms: u16,
    pub cycle_delay_ms: u16,
    pub boot_banner_ms: u16,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            supply_volts: SUPPLY_VOLTS,
            zero_offset_volts: SENSOR_ZERO_OFFSET_VOLTS,
            scale_c_per_volt: SENSOR_SCALE_C_PER_VOLT,
            alarm_threshold: ALARM_THRESHOLD,
            debounce_ms: BUTTON_DEBOUNCE_MS,
            cycle_delay_ms: CYCLE_DELAY_MS,
            boot_banner_ms: BOOT_BANNER_MS,
        }
    }
}
