//! GPIO line abstractions
//!
//! Pins are addressed by their logical number in the host GPIO scheme.
//! Writes are fire-and-forget: there is no failure channel.

/// Logic level of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if this is logic 1
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Check if this is logic 0
    pub const fn is_low(self) -> bool {
        !self.is_high()
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

/// Host GPIO capability consumed by the display driver
///
/// Implementations handle the actual hardware access for the host.
pub trait GpioPort {
    /// Put `pin` into push-pull output mode
    fn configure_as_output(&mut self, pin: u8);

    /// Drive `pin` to `level`
    fn set_line(&mut self, pin: u8, level: Level);

    /// Drive `pin` high (logic 1)
    fn set_high(&mut self, pin: u8) {
        self.set_line(pin, Level::High);
    }

    /// Drive `pin` low (logic 0)
    fn set_low(&mut self, pin: u8) {
        self.set_line(pin, Level::Low);
    }
}

// Lets a driver borrow a port instead of owning it
impl<T: GpioPort + ?Sized> GpioPort for &mut T {
    fn configure_as_output(&mut self, pin: u8) {
        (**self).configure_as_output(pin);
    }

    fn set_line(&mut self, pin: u8, level: Level) {
        (**self).set_line(pin, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Port that remembers the last level written to each of 4 pins
    struct LatchPort {
        outputs: u8,
        levels: [Level; 4],
    }

    impl LatchPort {
        fn new() -> Self {
            Self {
                outputs: 0,
                levels: [Level::Low; 4],
            }
        }
    }

    impl GpioPort for LatchPort {
        fn configure_as_output(&mut self, pin: u8) {
            self.outputs |= 1 << pin;
        }

        fn set_line(&mut self, pin: u8, level: Level) {
            self.levels[pin as usize] = level;
        }
    }

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert!(Level::Low.is_low());
    }

    #[test]
    fn test_default_helpers() {
        let mut port = LatchPort::new();
        port.configure_as_output(2);
        port.set_high(2);
        assert_eq!(port.outputs, 0b0100);
        assert_eq!(port.levels[2], Level::High);

        port.set_low(2);
        assert_eq!(port.levels[2], Level::Low);
    }

    #[test]
    fn test_borrowed_port() {
        let mut port = LatchPort::new();

        fn drive<G: GpioPort>(mut g: G) {
            g.configure_as_output(1);
            g.set_line(1, Level::High);
        }

        drive(&mut port);
        assert_eq!(port.outputs, 0b0010);
        assert!(port.levels[1].is_high());
    }
}
