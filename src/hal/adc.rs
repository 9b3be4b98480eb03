use avr_device::atmega328p::ADC;
use core::convert::Infallible;
use embedded_hal::adc::{Channel, OneShot};

const ADEN: u8 = 1 << 7;
const ADSC: u8 = 1 << 6;
const ADPS_DIV128: u8 = 0x07;
const REFS_AVCC: u8 = 1 << 6; // AVCC with external cap at AREF

macro_rules! analog_pins {
    ($($name:ident => $channel:expr),+ $(,)?) => {
        $(
            /// Analog input channel token
            pub struct $name;

            impl Channel<Adc> for $name {
                type ID = u8;

                fn channel() -> u8 {
                    $channel
                }
            }
        )+
    };
}

analog_pins!(A0 => 0, A1 => 1, A2 => 2, A3 => 3, A4 => 4, A5 => 5);

/// Single-conversion ADC driver
pub struct Adc {
    pending: Option<u8>,
}

impl Adc {
    /// AVCC reference, /128 prescaler (125 kHz at 16 MHz), digital input
    /// buffers off on A0-A2.
    pub fn new(_adc: ADC) -> Self {
        unsafe {
            let p = ADC::ptr();
            (*p).adcsra.write(|w| w.bits(ADEN | ADPS_DIV128));
            (*p).admux.write(|w| w.bits(REFS_AVCC));
            (*p).didr0.write(|w| w.bits(0x07));
        }
        Self { pending: None }
    }

    fn start(&mut self, channel: u8) {
        unsafe {
            let p = ADC::ptr();
            (*p).admux.modify(|r, w| w.bits((r.bits() & 0xF0) | (channel & 0x0F)));
            (*p).adcsra.modify(|r, w| w.bits(r.bits() | ADSC));
        }
        self.pending = Some(channel);
    }

    fn converting(&self) -> bool {
        unsafe { (*ADC::ptr()).adcsra.read().bits() & ADSC != 0 }
    }

    fn result(&self) -> u16 {
        // 16-bit access reads ADCL before ADCH
        unsafe { (*ADC::ptr()).adc.read().bits() }
    }
}

impl<PIN: Channel<Adc, ID = u8>> OneShot<Adc, u16, PIN> for Adc {
    type Error = Infallible;

    fn read(&mut self, _pin: &mut PIN) -> nb::Result<u16, Infallible> {
        let channel = PIN::channel();
        match self.pending {
            _ if self.converting() => Err(nb::Error::WouldBlock),
            Some(active) if active == channel => {
                self.pending = None;
                Ok(self.result())
            }
            // idle, or a finished conversion of another channel nobody collected
            _ => {
                self.start(channel);
                Err(nb::Error::WouldBlock)
            }
        }
    }
}
