//! Display mode state machine

/// Which of the four screens is shown
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Temperature,
    Humidity,
    Magnetic,
    Wind,
}

impl DisplayMode {
    pub const COUNT: u8 = 4;

    pub const fn index(self) -> u8 {
        match self {
            DisplayMode::Temperature => 0,
            DisplayMode::Humidity => 1,
            DisplayMode::Magnetic => 2,
            DisplayMode::Wind => 3,
        }
    }

    /// Index taken modulo [`Self::COUNT`].
    pub const fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => DisplayMode::Temperature,
            1 => DisplayMode::Humidity,
            2 => DisplayMode::Magnetic,
            _ => DisplayMode::Wind,
        }
    }

    /// The following screen, wrapping from `Wind` back to `Temperature`.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// One step of the machine: advance on a press, hold otherwise.
    pub const fn step(self, pressed: bool) -> Self {
        if pressed {
            self.next()
        } else {
            self
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DisplayMode::Temperature => "Temperature",
            DisplayMode::Humidity => "Humidity",
            DisplayMode::Magnetic => "Magnetic field",
            DisplayMode::Wind => "Wind",
        }
    }
}
