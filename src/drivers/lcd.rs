//! HD44780 character LCD behind a PCF8574 I2C backpack
//!
//! The expander drives the controller in 4-bit mode. Expander bit layout:
//! `P0` RS, `P1` RW, `P2` EN, `P3` backlight, `P4..P7` D4..D7.

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::blocking::i2c::Write;

use crate::config::LCD_ROWS;
use crate::display::CharDisplay;

const RS: u8 = 0x01;
const EN: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

const CMD_CLEAR: u8 = 0x01;
const CMD_HOME: u8 = 0x02;
const CMD_ENTRY_MODE: u8 = 0x06; // increment, no shift
const CMD_DISPLAY_ON: u8 = 0x0C; // display on, cursor off, blink off
const CMD_FUNCTION_SET: u8 = 0x28; // 4-bit, 2 lines, 5x8 font
const CMD_SET_DDRAM: u8 = 0x80;

const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

pub struct Lcd<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    backlight: u8,
}

impl<I2C, D, E> Lcd<I2C, D>
where
    I2C: Write<Error = E>,
    D: DelayMs<u16> + DelayUs<u16>,
{
    /// Does not touch the bus; call [`Lcd::init`] before use.
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            backlight: BACKLIGHT,
        }
    }

    /// Power-on reset into 4-bit mode, then display on with a blank screen.
    pub fn init(&mut self) -> Result<(), E> {
        self.delay.delay_ms(50);
        self.i2c.write(self.address, &[self.backlight])?;

        // Three times 8-bit "function set" resynchronizes the controller
        // whatever state it was left in
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(150);
        self.write_nibble(0x20, 0)?;

        self.command(CMD_FUNCTION_SET)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE)?;
        self.command(CMD_HOME)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    pub fn set_backlight(&mut self, on: bool) -> Result<(), E> {
        self.backlight = if on { BACKLIGHT } else { 0 };
        self.i2c.write(self.address, &[self.backlight])
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn command(&mut self, command: u8) -> Result<(), E> {
        self.send(command, 0)
    }

    /// Both nibbles in one bus transaction, each latched on the EN falling edge.
    fn send(&mut self, value: u8, mode: u8) -> Result<(), E> {
        let flags = mode | self.backlight;
        let high = (value & 0xF0) | flags;
        let low = ((value << 4) & 0xF0) | flags;
        self.i2c
            .write(self.address, &[high, high | EN, high, low, low | EN, low])
    }

    fn write_nibble(&mut self, nibble: u8, mode: u8) -> Result<(), E> {
        let value = (nibble & 0xF0) | mode | self.backlight;
        self.i2c.write(self.address, &[value, value | EN, value])
    }
}

impl<I2C, D, E> CharDisplay for Lcd<I2C, D>
where
    I2C: Write<Error = E>,
    D: DelayMs<u16> + DelayUs<u16>,
{
    type Error = E;

    fn clear(&mut self) -> Result<(), E> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    /// Rows past the last one land on the last row.
    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), E> {
        let row = if row >= LCD_ROWS { LCD_ROWS - 1 } else { row };
        let offset = ROW_OFFSETS[row as usize];
        self.command(CMD_SET_DDRAM | (column.wrapping_add(offset) & 0x7F))
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), E> {
        for &byte in bytes {
            self.send(byte, RS)?;
        }
        Ok(())
    }
}
