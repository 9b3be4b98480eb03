//! Error types shared across the station

use crate::sensors::SensorChannel;

/// A sensor channel that could not be sampled this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorError {
    /// The ADC reported a failure for this channel
    Unavailable(SensorChannel),
}

impl SensorError {
    pub const fn channel(&self) -> SensorChannel {
        match self {
            SensorError::Unavailable(channel) => *channel,
        }
    }
}

/// Failures that abort a cycle. `E` is the display bus error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StationError<E> {
    /// Button, LED or motor pin access failed
    Pin,
    /// Writing to the display failed
    Display(E),
}

impl<E> From<E> for StationError<E> {
    fn from(err: E) -> Self {
        StationError::Display(err)
    }
}
