use embedded_hal::digital::v2::InputPin;

/// A single push button wired between the pin and ground.
pub struct ButtonHandler<P> {
    pin: P,
}

impl<P: InputPin> ButtonHandler<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Current level of the button. Buttons are active low.
    pub fn is_pressed(&self) -> Result<bool, P::Error> {
        self.pin.is_low()
    }

    pub fn release(self) -> P {
        self.pin
    }
}
