//! Sensor acquisition and actuator derivation
//!
//! Both stages sample through [`AnalogSource`], so the conversions here are
//! independent of the ADC behind them. [`AdcBank`] adapts any `embedded-hal`
//! one-shot ADC plus its three channel pins.

use core::marker::PhantomData;

use embedded_hal::adc::{Channel, OneShot};

use crate::config::{StationConfig, ADC_MAX};
use crate::error::SensorError;
use crate::scale::RawReading;

/// Analog inputs sampled every cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorChannel {
    /// TMP36 voltage
    Temperature,
    /// Humidity potentiometer
    Humidity,
    /// Magnetic field / wind potentiometer, also drives motor and alarm
    Actuator,
}

impl SensorChannel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SensorChannel::Temperature => "temperature",
            SensorChannel::Humidity => "humidity",
            SensorChannel::Actuator => "actuator",
        }
    }
}

/// Read-channel capability
pub trait AnalogSource {
    /// Takes one sample. Readings above the ADC range come back clamped.
    fn read_raw(&mut self, channel: SensorChannel) -> Result<RawReading, SensorError>;
}

/// The three station channels on one `embedded-hal` ADC.
///
/// `MK` is the ADC marker type the channel pins are bound to, which need not
/// be the type doing the conversions.
pub struct AdcBank<ADC, MK, T, H, A> {
    adc: ADC,
    temperature: T,
    humidity: H,
    actuator: A,
    _marker: PhantomData<MK>,
}

impl<ADC, MK, T, H, A> AdcBank<ADC, MK, T, H, A> {
    pub fn new(adc: ADC, temperature: T, humidity: H, actuator: A) -> Self {
        Self {
            adc,
            temperature,
            humidity,
            actuator,
            _marker: PhantomData,
        }
    }

    /// Gives back the ADC and the channel pins.
    pub fn release(self) -> (ADC, T, H, A) {
        (self.adc, self.temperature, self.humidity, self.actuator)
    }
}

impl<ADC, MK, T, H, A> AnalogSource for AdcBank<ADC, MK, T, H, A>
where
    ADC: OneShot<MK, u16, T> + OneShot<MK, u16, H> + OneShot<MK, u16, A>,
    T: Channel<MK>,
    H: Channel<MK>,
    A: Channel<MK>,
{
    fn read_raw(&mut self, channel: SensorChannel) -> Result<RawReading, SensorError> {
        let sample = match channel {
            SensorChannel::Temperature => {
                nb::block!(<ADC as OneShot<MK, u16, T>>::read(&mut self.adc, &mut self.temperature))
                    .map_err(|_| ())
            }
            SensorChannel::Humidity => {
                nb::block!(<ADC as OneShot<MK, u16, H>>::read(&mut self.adc, &mut self.humidity))
                    .map_err(|_| ())
            }
            SensorChannel::Actuator => {
                nb::block!(<ADC as OneShot<MK, u16, A>>::read(&mut self.adc, &mut self.actuator))
                    .map_err(|_| ())
            }
        };

        sample
            .map(RawReading::new)
            .map_err(|_| SensorError::Unavailable(channel))
    }
}

/// Temperature and humidity of one cycle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Climate {
    /// Degrees Celsius
    pub temperature: Result<f32, SensorError>,
    /// 0..=100
    pub humidity: Result<u8, SensorError>,
}

/// Everything derived from the single actuator-channel sample
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActuatorReading {
    pub raw: RawReading,
    pub magnetic_percent: u8,
    pub duty: u8,
}

impl ActuatorReading {
    pub const fn from_raw(raw: RawReading) -> Self {
        Self {
            raw,
            magnetic_percent: raw.percent(),
            duty: raw.duty(),
        }
    }
}

/// All derived values of one cycle, as handed to the renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub climate: Climate,
    pub actuator: Result<ActuatorReading, SensorError>,
}

/// TMP36 transfer function: volts from the sample, then offset and scale.
pub fn temperature_from_raw(raw: RawReading, config: &StationConfig) -> f32 {
    let volts = raw.get() as f32 * (config.supply_volts / ADC_MAX as f32);
    (volts - config.zero_offset_volts) * config.scale_c_per_volt
}

/// Samples temperature then humidity.
pub fn acquire_climate<S: AnalogSource>(source: &mut S, config: &StationConfig) -> Climate {
    let temperature = source
        .read_raw(SensorChannel::Temperature)
        .map(|raw| temperature_from_raw(raw, config));
    let humidity = source
        .read_raw(SensorChannel::Humidity)
        .map(RawReading::percent);

    Climate {
        temperature,
        humidity,
    }
}

/// Samples the actuator channel once and derives percent and duty from it.
pub fn derive_actuator<S: AnalogSource>(source: &mut S) -> Result<ActuatorReading, SensorError> {
    source
        .read_raw(SensorChannel::Actuator)
        .map(ActuatorReading::from_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource {
        temperature: Option<u16>,
        humidity: Option<u16>,
        actuator: Option<u16>,
        reads: u8,
    }

    impl AnalogSource for FixedSource {
        fn read_raw(&mut self, channel: SensorChannel) -> Result<RawReading, SensorError> {
            self.reads += 1;
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

    fn source(temperature: Option<u16>, humidity: Option<u16>, actuator: Option<u16>) -> FixedSource {
        FixedSource {
            temperature,
            humidity,
            actuator,
            reads: 0,
        }
    }

    #[test]
    fn half_volt_is_zero_celsius() {
        let temp = temperature_from_raw(RawReading::new(102), &StationConfig::default());
        // one ADC step is ~0.49 °C
        assert!(temp.abs() < 0.5, "got {}", temp);
    }

    #[test]
    fn temperature_endpoints() {
        let config = StationConfig::default();
        let low = temperature_from_raw(RawReading::new(0), &config);
        let high = temperature_from_raw(RawReading::new(1023), &config);
        assert!((low + 50.0).abs() < 0.001);
        assert!((high - 450.0).abs() < 0.001);
    }

    #[test]
    fn room_temperature() {
        // 0.75 V => 25 °C
        let temp = temperature_from_raw(RawReading::new(153), &StationConfig::default());
        assert!((temp - 24.78).abs() < 0.05, "got {}", temp);
    }

    #[test]
    fn climate_reads_both_channels() {
        let mut src = source(Some(153), Some(1023), None);
        let climate = acquire_climate(&mut src, &StationConfig::default());
        assert_eq!(src.reads, 2);
        assert!(climate.temperature.is_ok());
        assert_eq!(climate.humidity, Ok(100));
    }

    #[test]
    fn climate_keeps_working_channel() {
        let mut src = source(None, Some(512), None);
        let climate = acquire_climate(&mut src, &StationConfig::default());
        assert_eq!(
            climate.temperature,
            Err(SensorError::Unavailable(SensorChannel::Temperature))
        );
        assert_eq!(climate.humidity, Ok(50));
    }

    #[test]
    fn actuator_full_scale() {
        let mut src = source(None, None, Some(1023));
        let reading = derive_actuator(&mut src).unwrap();
        assert_eq!(src.reads, 1);
        assert_eq!(reading.raw.get(), 1023);
        assert_eq!(reading.magnetic_percent, 100);
        assert_eq!(reading.duty, 255);
    }

    #[test]
    fn actuator_zero() {
        let mut src = source(None, None, Some(0));
        let reading = derive_actuator(&mut src).unwrap();
        assert_eq!(reading.magnetic_percent, 0);
        assert_eq!(reading.duty, 0);
    }

    #[test]
    fn actuator_out_of_range_is_clamped() {
        let mut src = source(None, None, Some(2000));
        let reading = derive_actuator(&mut src).unwrap();
        assert_eq!(reading.raw.get(), 1023);
        assert_eq!(reading.duty, 255);
    }

    #[test]
    fn actuator_unavailable() {
        let mut src = source(Some(0), Some(0), None);
        assert_eq!(
            derive_actuator(&mut src),
            Err(SensorError::Unavailable(SensorChannel::Actuator))
        );
    }

    mod adc_bank {
        use super::super::*;
        use embedded_hal_mock::adc::{Mock, MockAdc, MockChan0, MockChan1, MockChan2, Transaction};
        use embedded_hal_mock::MockError;
        use std::io::ErrorKind;

        type Bank = AdcBank<Mock<u16>, MockAdc, MockChan0, MockChan1, MockChan2>;

        #[test]
        fn channels_map_to_adc_inputs() {
            let expectations = [
                Transaction::read(0, 153u16),
                Transaction::read(1, 512u16),
                Transaction::read(2, 1023u16),
            ];
            let mut adc = Mock::new(&expectations);
            let mut bank: Bank = AdcBank::new(adc.clone(), MockChan0, MockChan1, MockChan2);

            let climate = acquire_climate(&mut bank, &StationConfig::default());
            assert!(climate.temperature.is_ok());
            assert_eq!(climate.humidity, Ok(50));
            assert_eq!(derive_actuator(&mut bank).map(|r| r.duty), Ok(255));
            adc.done();
        }

        #[test]
        fn samples_above_range_are_clamped() {
            let expectations = [Transaction::read(2, 4095u16)];
            let mut adc = Mock::new(&expectations);
            let mut bank: Bank = AdcBank::new(adc.clone(), MockChan0, MockChan1, MockChan2);

            assert_eq!(
                bank.read_raw(SensorChannel::Actuator),
                Ok(RawReading::new(1023))
            );
            adc.done();
        }

        #[test]
        fn conversion_error_is_unavailable() {
            let expectations =
                [Transaction::read(1, 0u16).with_error(MockError::Io(ErrorKind::TimedOut))];
            let mut adc = Mock::new(&expectations);
            let mut bank: Bank = AdcBank::new(adc.clone(), MockChan0, MockChan1, MockChan2);

            assert_eq!(
                bank.read_raw(SensorChannel::Humidity),
                Err(SensorError::Unavailable(SensorChannel::Humidity))
            );
            adc.done();
        }
    }
}
