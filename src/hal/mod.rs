//! ATmega328P bindings for the `embedded-hal` traits the station uses
pub mod adc;
pub mod gpio;
pub mod pwm;
pub mod timer;
pub mod twi;
pub mod uart;

pub use adc::Adc;
pub use gpio::{Input, Output, Pin, Pins};
pub use pwm::Timer1Pwm;
pub use timer::Delay;
pub use twi::{Twi, TwiError};
pub use uart::Uart;
