//! TWI (I2C) master, blocking
use avr_device::atmega328p::TWI;
use embedded_hal::blocking::i2c::Write;

const TWINT: u8 = 0x80;
const TWSTA: u8 = 0x20;
const TWSTO: u8 = 0x10;
const TWEN: u8 = 0x04;

// SCL = F_CPU / (16 + 2 * TWBR), prescaler 1
const TWBR_100K: u8 = ((crate::config::CPU_FREQ_HZ / 100_000 - 16) / 2) as u8;

/// TWI status codes
#[derive(Clone, Copy, PartialEq)]
#[repr(u8)]
pub enum TwiStatus {
    StartTransmitted = 0x08,
    RepStartTransmitted = 0x10,
    AddrWriteAck = 0x18,
    AddrWriteNack = 0x20,
    DataWriteAck = 0x28,
    DataWriteNack = 0x30,
    ArbitrationLost = 0x38,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwiError {
    /// START was not acknowledged by the hardware; carries TWSR
    Start(u8),
    AddressNack,
    DataNack,
    ArbitrationLost,
    /// Any other status, carries TWSR
    Bus(u8),
}

pub struct Twi {
    _twi: TWI,
}

impl Twi {
    /// Enables the peripheral at 100 kHz.
    pub fn new(twi: TWI) -> Self {
        unsafe {
            let p = TWI::ptr();
            (*p).twbr.write(|w| w.bits(TWBR_100K));
            (*p).twsr.write(|w| w.bits(0));
            (*p).twcr.write(|w| w.bits(TWEN));
        }
        Self { _twi: twi }
    }

    fn wait(&mut self) -> u8 {
        unsafe {
            let p = TWI::ptr();
            while (*p).twcr.read().bits() & TWINT == 0 {}
            (*p).twsr.read().bits() & 0xF8
        }
    }

    fn start(&mut self) -> Result<(), TwiError> {
        unsafe {
            (*TWI::ptr()).twcr.write(|w| w.bits(TWINT | TWSTA | TWEN));
        }
        match self.wait() {
            s if s == TwiStatus::StartTransmitted as u8 || s == TwiStatus::RepStartTransmitted as u8 => Ok(()),
            s => Err(TwiError::Start(s)),
        }
    }

    fn stop(&mut self) {
        unsafe {
            let p = TWI::ptr();
            (*p).twcr.write(|w| w.bits(TWINT | TWSTO | TWEN));
            while (*p).twcr.read().bits() & TWSTO != 0 {}
        }
    }

    fn transmit(&mut self, byte: u8) -> u8 {
        unsafe {
            let p = TWI::ptr();
            (*p).twdr.write(|w| w.bits(byte));
            (*p).twcr.write(|w| w.bits(TWINT | TWEN));
        }
        self.wait()
    }

    fn write_frame(&mut self, address: u8, bytes: &[u8]) -> Result<(), TwiError> {
        self.start()?;

        match self.transmit(address << 1) {
            s if s == TwiStatus::AddrWriteAck as u8 => {}
            s if s == TwiStatus::AddrWriteNack as u8 => return Err(TwiError::AddressNack),
            s if s == TwiStatus::ArbitrationLost as u8 => return Err(TwiError::ArbitrationLost),
            s => return Err(TwiError::Bus(s)),
        }

        for &byte in bytes {
            match self.transmit(byte) {
                s if s == TwiStatus::DataWriteAck as u8 => {}
                s if s == TwiStatus::DataWriteNack as u8 => return Err(TwiError::DataNack),
                s if s == TwiStatus::ArbitrationLost as u8 => return Err(TwiError::ArbitrationLost),
                s => return Err(TwiError::Bus(s)),
            }
        }
        Ok(())
    }
}

impl Write for Twi {
    type Error = TwiError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), TwiError> {
        let result = self.write_frame(address, bytes);
        // after a lost arbitration the bus is not ours to stop
        if result != Err(TwiError::ArbitrationLost) {
            self.stop();
        }
        result
    }
}
