use avr_device::atmega328p::{PORTB, PORTC, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// Register access shared by all pins of one port
pub trait Port {
    /// Sets or clears `mask` in the data direction register.
    fn set_direction(mask: u8, output: bool);
    /// Sets or clears `mask` in the output / pull-up register.
    fn set_level(mask: u8, high: bool);
    fn read_input() -> u8;
}

macro_rules! impl_port {
    ($PORT:ident, $pin:ident, $ddr:ident, $port:ident) => {
        impl Port for $PORT {
            #[inline]
            fn set_direction(mask: u8, output: bool) {
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| {
                        w.bits(if output { r.bits() | mask } else { r.bits() & !mask })
                    });
                }
            }

            #[inline]
            fn set_level(mask: u8, high: bool) {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| {
                        w.bits(if high { r.bits() | mask } else { r.bits() & !mask })
                    });
                }
            }

            #[inline]
            fn read_input() -> u8 {
                unsafe { (*$PORT::ptr()).$pin.read().bits() }
            }
        }
    };
}

impl_port!(PORTB, pinb, ddrb, portb);
impl_port!(PORTC, pinc, ddrc, portc);
impl_port!(PORTD, pind, ddrd, portd);

#[derive(Debug)]
pub struct Pin<PORT, const PIN: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT: Port, const P: u8, MODE: PinMode> Pin<PORT, P, MODE> {
    const MASK: u8 = 1 << P;

    const fn new() -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }

    pub fn into_output(self) -> Pin<PORT, P, Output> {
        PORT::set_level(Self::MASK, false);
        PORT::set_direction(Self::MASK, true);
        Pin::new()
    }

    /// Input with the internal pull-up enabled
    pub fn into_pull_up_input(self) -> Pin<PORT, P, Input> {
        PORT::set_direction(Self::MASK, false);
        PORT::set_level(Self::MASK, true);
        Pin::new()
    }
}

impl<PORT: Port, const P: u8> OutputPin for Pin<PORT, P, Output> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        PORT::set_level(1 << P, true);
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        PORT::set_level(1 << P, false);
        Ok(())
    }
}

impl<PORT: Port, const P: u8> InputPin for Pin<PORT, P, Input> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(PORT::read_input() & (1 << P) != 0)
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(PORT::read_input() & (1 << P) == 0)
    }
}

/// The pins the station uses, in their reset state (floating inputs)
pub struct Pins {
    /// Mode button
    pub d2: Pin<PORTD, 2, Input>,
    /// Alarm LED
    pub d8: Pin<PORTB, 0, Input>,
    /// Motor PWM, OC1A
    pub d9: Pin<PORTB, 1, Input>,
}

impl Pins {
    /// Takes the port peripherals so no other code can drive them.
    pub fn new(_portb: PORTB, _portc: PORTC, _portd: PORTD) -> Self {
        Self {
            d2: Pin::new(),
            d8: Pin::new(),
            d9: Pin::new(),
        }
    }
}
