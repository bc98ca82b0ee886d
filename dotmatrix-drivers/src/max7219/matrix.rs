//! Stacked LED matrix display
//!
//! A chain of 8x8 modules stacked vertically and addressed as one tall
//! display, 8 pixels wide and `modules * 8` pixels high. The driver keeps
//! an in-memory copy of every chip's column registers and repaints whole
//! columns from it.
//!
//! # Invalid input
//!
//! Nothing here reports errors. Out-of-range coordinates and columns are
//! ignored, and if the buffer could not be allocated every drawing
//! operation becomes a no-op.

use dotmatrix_core::buffer::{FrameBuffer, COLUMNS};
use dotmatrix_core::config::MatrixConfig;
use dotmatrix_core::registers::digit_register;
use dotmatrix_core::traits::PixelDisplay;
use dotmatrix_hal::GpioPort;

use super::protocol::RegisterBus;

/// MAX7219 chain driven as one pixel display
pub struct DotMatrix<G> {
    bus: RegisterBus<G>,
    buffer: FrameBuffer,
}

impl<G: GpioPort> DotMatrix<G> {
    /// Create the driver and bring the chain up
    ///
    /// Configures the control lines as outputs, allocates a zeroed buffer,
    /// clears every column on the chips, then writes the power-on
    /// registers (intensity, scan limit, shutdown, decode mode, display
    /// test) from `config`.
    pub fn new(port: G, config: &MatrixConfig) -> Self {
        let modules = config.modules as usize;
        let buffer = FrameBuffer::new(modules);
        Self::with_buffer(port, config, buffer)
    }

    /// Bring the chain up around an existing buffer
    ///
    /// The buffer must hold `config.modules` modules. Used when the
    /// allocation is done elsewhere, or to model an allocation failure.
    pub fn with_buffer(port: G, config: &MatrixConfig, buffer: FrameBuffer) -> Self {
        let bus = RegisterBus::new(
            port,
            config.data_pin.pin,
            config.clock_pin.pin,
            config.load_pin.pin,
            buffer.modules(),
        );
        let mut matrix = Self { bus, buffer };

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: {} modules, intensity {}",
            config.name.as_str(),
            matrix.buffer.modules(),
            config.intensity
        );

        matrix.bus.configure_outputs();
        matrix.clear();
        for (reg, data) in config.settings().register_writes() {
            matrix.bus.set_register(reg, data);
        }
        matrix
    }

    /// Set or clear a pixel in memory only
    ///
    /// Returns `false` if the coordinate is out of range or there is no
    /// buffer.
    pub fn buffer_pixel(&mut self, x: u8, y: u16, on: bool) -> bool {
        self.buffer.set_pixel(x, y, on)
    }

    /// Repaint column `col` on every module in one load pulse
    ///
    /// Sends the column's digit register with each chip's buffered byte,
    /// in chip-position order.
    pub fn sync_column(&mut self, col: u8) {
        if !self.buffer.is_allocated() {
            return;
        }
        let Some(digit) = digit_register(col) else {
            return;
        };
        self.bus
            .latch(self.buffer.column(col).map(|data| (digit, data)));
    }

    /// Set or clear a pixel and repaint its column
    ///
    /// The whole column is rewritten on all modules, not just the module
    /// holding the pixel: a latch pulse always commits the entire chain.
    pub fn write(&mut self, x: u8, y: u16, on: bool) {
        if !self.buffer_pixel(x, y, on) {
            return;
        }
        self.sync_column(x);
    }

    /// Turn every pixel off and repaint all 8 columns
    pub fn clear(&mut self) {
        if !self.buffer.is_allocated() {
            return;
        }
        self.buffer.clear();
        for col in 0..COLUMNS as u8 {
            self.sync_column(col);
        }
    }

    /// Read a pixel from the buffer (never from the hardware)
    pub fn pixel(&self, x: u8, y: u16) -> Option<bool> {
        self.buffer.pixel(x, y)
    }

    /// The in-memory column mirror
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Number of cascaded modules
    pub fn modules(&self) -> usize {
        self.buffer.modules()
    }

    /// Borrow the GPIO port
    pub fn port(&self) -> &G {
        self.bus.port()
    }

    /// Mutably borrow the GPIO port
    pub fn port_mut(&mut self) -> &mut G {
        self.bus.port_mut()
    }

    /// Tear the driver down and return the GPIO port
    pub fn release(self) -> G {
        self.bus.into_port()
    }
}

impl<G: GpioPort> PixelDisplay for DotMatrix<G> {
    fn write(&mut self, x: u8, y: u16, on: bool) {
        DotMatrix::write(self, x, y, on);
    }

    fn clear(&mut self) {
        DotMatrix::clear(self);
    }

    fn dimensions(&self) -> (u8, u16) {
        (self.buffer.width(), self.buffer.height())
    }
}
