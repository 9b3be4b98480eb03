use avr_device::atmega328p::USART0;
use core::convert::Infallible;
use embedded_hal::serial::Write;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

const UDRE0: u8 = 1 << 5;
const TXC0: u8 = 1 << 6;
const TXEN0: u8 = 1 << 3;
const UCSZ_8BIT: u8 = 0x06; // 8N1

/// Transmit-only USART0, polled
pub struct Uart {
    _usart: USART0,
    /// A byte was written since the last completed flush
    pending: bool,
}

impl Uart {
    pub fn new(usart: USART0) -> Self {
        let ubrr = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16; // 103 for 9600 @ 16MHz
        unsafe {
            let p = USART0::ptr();
            (*p).ubrr0.write(|w| w.bits(ubrr));
            (*p).ucsr0a.write(|w| w.bits(0));
            (*p).ucsr0c.write(|w| w.bits(UCSZ_8BIT));
            (*p).ucsr0b.write(|w| w.bits(TXEN0));
        }
        Self {
            _usart: usart,
            pending: false,
        }
    }
}

impl Write<u8> for Uart {
    type Error = Infallible;

    fn write(&mut self, word: u8) -> nb::Result<(), Infallible> {
        unsafe {
            let p = USART0::ptr();
            if (*p).ucsr0a.read().bits() & UDRE0 == 0 {
                return Err(nb::Error::WouldBlock);
            }
            // clear TXC so flush waits for this byte
            (*p).ucsr0a.modify(|r, w| w.bits((r.bits() & 0x03) | TXC0));
            (*p).udr0.write(|w| w.bits(word));
        }
        self.pending = true;
        Ok(())
    }

    /// TXC only rises after a transmission, so an idle port counts as flushed.
    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if !self.pending {
            return Ok(());
        }
        let status = unsafe { (*USART0::ptr()).ucsr0a.read().bits() };
        if status & UDRE0 != 0 && status & TXC0 != 0 {
            self.pending = false;
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}
