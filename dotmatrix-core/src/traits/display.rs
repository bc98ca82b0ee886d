//! Pixel-level display trait

/// A monochrome pixel display backed by a buffer
///
/// Out-of-range coordinates are silently ignored: no pixel changes and no
/// hardware traffic. Implementations never surface a fault to the caller.
pub trait PixelDisplay {
    /// Set or clear the pixel at `(x, y)` and push it to the hardware
    fn write(&mut self, x: u8, y: u16, on: bool);

    /// Turn every pixel off and repaint the whole display
    fn clear(&mut self);

    /// Get the display dimensions
    ///
    /// Returns (width, height) in pixels
    fn dimensions(&self) -> (u8, u16);
}
