//! Serial link primitive
//!
//! Shifts bytes out on the data line, most significant bit first. Each bit
//! is set up while the clock is low and sampled by the chips on the rising
//! edge. The caller must hold the load line low for the whole transfer.

use dotmatrix_hal::{GpioPort, Level};

/// Data and clock lines of a 3-wire link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftOut {
    data_pin: u8,
    clock_pin: u8,
}

impl ShiftOut {
    /// Create a link on the given data and clock pins
    pub const fn new(data_pin: u8, clock_pin: u8) -> Self {
        Self {
            data_pin,
            clock_pin,
        }
    }

    /// Data line pin number
    pub const fn data_pin(&self) -> u8 {
        self.data_pin
    }

    /// Clock line pin number
    pub const fn clock_pin(&self) -> u8 {
        self.clock_pin
    }

    /// Shift one byte out, MSB first
    pub fn send_byte<G: GpioPort + ?Sized>(&self, port: &mut G, value: u8) {
        for bit in (0..8).rev() {
            let mask = 1u8 << bit;
            port.set_line(self.clock_pin, Level::Low);
            port.set_line(self.data_pin, Level::from(value & mask != 0));
            port.set_line(self.clock_pin, Level::High);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Event, RecordingPort, CLOCK, DATA};
    use alloc::vec::Vec;

    #[test]
    fn test_send_byte_msb_first() {
        let link = ShiftOut::new(DATA, CLOCK);
        let mut port = RecordingPort::new();

        link.send_byte(&mut port, 0b1010_0001);

        let data: Vec<bool> = port.levels(DATA).iter().map(|l| l.is_high()).collect();
        assert_eq!(
            data,
            [true, false, true, false, false, false, false, true]
        );
    }

    #[test]
    fn test_clock_low_data_high_sequence() {
        let link = ShiftOut::new(DATA, CLOCK);
        let mut port = RecordingPort::new();

        link.send_byte(&mut port, 0xFF);

        // 3 line writes per bit: clock low, data, clock high
        assert_eq!(port.transitions(), 24);
        for bit in port.events.chunks(3) {
            assert_eq!(bit[0], Event::Set(CLOCK, Level::Low));
            assert_eq!(bit[1], Event::Set(DATA, Level::High));
            assert_eq!(bit[2], Event::Set(CLOCK, Level::High));
        }
    }

    #[test]
    fn test_send_byte_never_touches_load() {
        let link = ShiftOut::new(DATA, CLOCK);
        let mut port = RecordingPort::new();

        link.send_byte(&mut port, 0x5A);

        assert!(port.levels(crate::mock::LOAD).is_empty());
    }
}
