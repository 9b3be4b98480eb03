use embedded_hal::digital::v2::OutputPin;

/// Alarm indicator LED, lit when driven high.
pub struct AlarmLed<P> {
    pin: P,
    lit: bool,
}

impl<P: OutputPin> AlarmLed<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, lit: false }
    }

    /// Drives the pin every call, even when the state is unchanged.
    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        if on {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.lit = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.lit
    }

    pub fn release(self) -> P {
        self.pin
    }
}
