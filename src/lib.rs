//! Weather station firmware for ATmega328P boards
//!
//! Every cycle samples temperature, humidity and a magnetic field / wind
//! potentiometer, drives a motor and an alarm LED from the latter, and shows
//! one of four screens on a 16x2 LCD. A push button steps through the
//! screens.
//!
//! The cycle logic only talks to `embedded-hal` traits and the small
//! [`AnalogSource`](sensors::AnalogSource) and
//! [`CharDisplay`](display::CharDisplay) capabilities, so it runs on the host
//! against mocks. The register-level bindings in `hal` are built for AVR only.
#![cfg_attr(not(test), no_std)]

pub mod alarm;
pub mod application;
pub mod config;
pub mod display;
pub mod drivers;
pub mod error;
pub mod logger;
pub mod mode;
pub mod render;
pub mod scale;
pub mod sensors;

#[cfg(target_arch = "avr")]
pub mod hal;

pub use application::{CycleReport, Station};
pub use config::StationConfig;
pub use error::{SensorError, StationError};
pub use mode::DisplayMode;
pub use scale::{map, RawReading};
