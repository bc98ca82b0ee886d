//! `embedded-hal` pin adapter
//!
//! Bundles the three control lines of a chain into a [`GpioPort`], keyed by
//! their logical pin numbers. `embedded-hal` output pins are outputs by
//! type, so configuring them is a no-op. Pin errors are dropped: the link
//! is fire-and-forget.

use dotmatrix_core::config::MatrixConfig;
use dotmatrix_hal::{GpioPort, Level};
use embedded_hal::digital::OutputPin;

/// Data, clock and load pins exposed as a numbered port
pub struct PinPort<D, C, L> {
    data: (u8, D),
    clock: (u8, C),
    load: (u8, L),
}

impl<D, C, L> PinPort<D, C, L>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    /// Wrap pins already converted to outputs
    pub fn new(data: (u8, D), clock: (u8, C), load: (u8, L)) -> Self {
        Self { data, clock, load }
    }

    /// Wrap pins using the pin numbers from `config`
    pub fn from_config(config: &MatrixConfig, data: D, clock: C, load: L) -> Self {
        Self::new(
            (config.data_pin.pin, data),
            (config.clock_pin.pin, clock),
            (config.load_pin.pin, load),
        )
    }

    /// Give the pins back
    pub fn release(self) -> (D, C, L) {
        (self.data.1, self.clock.1, self.load.1)
    }
}

fn drive<P: OutputPin>(pin: &mut P, level: Level) {
    let _ = match level {
        Level::High => pin.set_high(),
        Level::Low => pin.set_low(),
    };
}

impl<D, C, L> GpioPort for PinPort<D, C, L>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    fn configure_as_output(&mut self, _pin: u8) {}

    fn set_line(&mut self, pin: u8, level: Level) {
        if pin == self.data.0 {
            drive(&mut self.data.1, level);
        } else if pin == self.clock.0 {
            drive(&mut self.clock.1, level);
        } else if pin == self.load.0 {
            drive(&mut self.load.1, level);
        }
    }
}
