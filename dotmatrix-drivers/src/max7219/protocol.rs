//! Register protocol
//!
//! Frames (register, data) pairs for a whole chain inside one load pulse:
//! load low, shift one pair per chip position, then load high (latch) and
//! back low. Every chip sees every shifted byte, so a chain-wide write is
//! the only write granularity.

use dotmatrix_hal::{GpioPort, Level};

use super::serial::ShiftOut;

/// Owns the GPIO port and the three control lines of a chain
pub struct RegisterBus<G> {
    port: G,
    link: ShiftOut,
    load_pin: u8,
    chain_len: usize,
}

impl<G: GpioPort> RegisterBus<G> {
    /// Create a bus for `chain_len` cascaded chips
    ///
    /// Does not touch the lines; call [`configure_outputs`](Self::configure_outputs)
    /// before the first transaction.
    pub fn new(port: G, data_pin: u8, clock_pin: u8, load_pin: u8, chain_len: usize) -> Self {
        Self {
            port,
            link: ShiftOut::new(data_pin, clock_pin),
            load_pin,
            chain_len,
        }
    }

    /// Put clock, data and load into output mode
    pub fn configure_outputs(&mut self) {
        self.port.configure_as_output(self.link.clock_pin());
        self.port.configure_as_output(self.link.data_pin());
        self.port.configure_as_output(self.load_pin);
    }

    /// Number of chips in the chain
    pub fn chain_len(&self) -> usize {
        self.chain_len
    }

    /// Shift `pairs` inside a single load pulse
    ///
    /// Pairs are sent in iteration order. The first pair ends up in the
    /// chip furthest from the data input once the pulse latches.
    pub fn latch<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (u8, u8)>,
    {
        self.port.set_line(self.load_pin, Level::Low);
        for (reg, data) in pairs {
            self.link.send_byte(&mut self.port, reg);
            self.link.send_byte(&mut self.port, data);
        }
        // Data latches on the rising edge
        self.port.set_line(self.load_pin, Level::High);
        self.port.set_line(self.load_pin, Level::Low);
    }

    /// Write the same value to `reg` on every chip
    pub fn set_register(&mut self, reg: u8, data: u8) {
        let chain_len = self.chain_len;
        self.latch(core::iter::repeat((reg, data)).take(chain_len));
    }

    /// Borrow the underlying port
    pub fn port(&self) -> &G {
        &self.port
    }

    /// Mutably borrow the underlying port
    pub fn port_mut(&mut self) -> &mut G {
        &mut self.port
    }

    /// Release the underlying port
    pub fn into_port(self) -> G {
        self.port
    }
}
