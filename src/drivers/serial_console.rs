use embedded_hal::serial::Write;
use ufmt::uWrite;

/// Blocking text output over any `embedded-hal` serial port.
pub struct SerialConsole<S> {
    serial: S,
}

impl<S: Write<u8>> SerialConsole<S> {
    pub fn new(serial: S) -> Self {
        Self { serial }
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), S::Error> {
        nb::block!(self.serial.write(byte))
    }

    pub fn release(self) -> S {
        self.serial
    }
}

impl<S: Write<u8>> uWrite for SerialConsole<S> {
    type Error = S::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}
