use avr_device::atmega328p::TC0;
use embedded_hal::blocking::delay::{DelayMs, DelayUs};

#[derive(Clone, Copy)]
enum Prescaler {
    Stop = 0,
    Div8 = 2,
    Div64 = 3,
}

/// Busy-wait delays on Timer0
///
/// Every copy shares Timer0, which is fine as long as delays never nest.
#[derive(Clone, Copy)]
pub struct Delay {
    _private: (),
}

impl Delay {
    /// Puts Timer0 in normal mode, stopped.
    pub fn new(_tc0: TC0) -> Self {
        unsafe {
            let p = TC0::ptr();
            (*p).tccr0a.write(|w| w.bits(0));
            (*p).tccr0b.write(|w| w.bits(Prescaler::Stop as u8));
            (*p).timsk0.write(|w| w.bits(0));
        }
        Self { _private: () }
    }

    fn wait_ticks(prescaler: Prescaler, ticks: u8) {
        unsafe {
            let p = TC0::ptr();
            (*p).tcnt0.write(|w| w.bits(0));
            (*p).tccr0b.write(|w| w.bits(prescaler as u8));
            while (*p).tcnt0.read().bits() < ticks {}
            (*p).tccr0b.write(|w| w.bits(Prescaler::Stop as u8));
        }
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        // 16MHz / 64 = 250kHz, 250 ticks = 1ms
        for _ in 0..ms {
            Self::wait_ticks(Prescaler::Div64, 250);
        }
    }
}

impl DelayUs<u16> for Delay {
    fn delay_us(&mut self, us: u16) {
        // 16MHz / 8 = 2 ticks per microsecond
        let mut remaining = us;
        while remaining > 0 {
            let chunk = if remaining > 100 { 100 } else { remaining };
            Self::wait_ticks(Prescaler::Div8, (chunk * 2) as u8);
            remaining -= chunk;
        }
    }
}
