//! PWM on Timer1 channel A (`OC1A`, Arduino pin 9)
//!
//! 8-bit phase correct mode with a /64 prescaler, ~490 Hz at 16 MHz.

use avr_device::atmega328p::{PORTB, TC1};
use embedded_hal::PwmPin;

use crate::hal::gpio::{Output, Pin};

const COM1A1: u8 = 0x80;
const WGM10: u8 = 0x01; // phase correct, 8-bit, TOP = 0xFF
const CS_DIV64: u8 = 0x03;

pub struct Timer1Pwm {
    _pin: Pin<PORTB, 1, Output>,
}

impl Timer1Pwm {
    /// Starts the timer with the output disconnected and duty 0.
    pub fn new(_tc1: TC1, pin: Pin<PORTB, 1, Output>) -> Self {
        unsafe {
            let p = TC1::ptr();
            (*p).timsk1.write(|w| w.bits(0));
            (*p).tccr1a.write(|w| w.bits(WGM10));
            (*p).tccr1b.write(|w| w.bits(CS_DIV64));
            (*p).ocr1a.write(|w| w.bits(0));
        }
        Self { _pin: pin }
    }
}

impl PwmPin for Timer1Pwm {
    type Duty = u8;

    fn disable(&mut self) {
        unsafe {
            (*TC1::ptr()).tccr1a.modify(|r, w| w.bits(r.bits() & !COM1A1));
        }
    }

    fn enable(&mut self) {
        unsafe {
            (*TC1::ptr()).tccr1a.modify(|r, w| w.bits(r.bits() | COM1A1));
        }
    }

    fn get_duty(&self) -> u8 {
        unsafe { (*TC1::ptr()).ocr1a.read().bits() as u8 }
    }

    fn get_max_duty(&self) -> u8 {
        u8::MAX
    }

    fn set_duty(&mut self, duty: u8) {
        unsafe {
            (*TC1::ptr()).ocr1a.write(|w| w.bits(duty as u16));
        }
    }
}
