//! Display buffer and pixel mapper
//!
//! The buffer mirrors the digit SRAM of every chip in the chain. It is a
//! flat byte sequence of `modules * 8` bytes: one byte per column per
//! module, with module 0 at indices 0..8, module 1 at 8..16, and so on.
//! Bit 7 of each byte is the top row of that module's 8-row band.
//!
//! Logical coordinates span the stacked modules vertically: `x` is the
//! column shared by all modules (0-7) and `y` is the global row
//! (0..modules*8). Pixel `(x, y)` lives at byte `x + 8 * (y / 8)`, bit
//! `7 - (y % 8)`.

use alloc::vec::Vec;

/// Columns per module
pub const COLUMNS: usize = 8;

/// Rows per module
pub const ROWS_PER_MODULE: usize = 8;

/// Maximum number of modules in one chain
pub const MAX_MODULES: usize = 16;

/// Location of one pixel inside the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelAddress {
    /// Byte index into the buffer
    pub index: usize,
    /// Single-bit mask within that byte
    pub mask: u8,
}

/// Map a logical pixel onto the buffer
///
/// Returns `None` when `x >= 8`, `y >= modules * 8`, or the module count
/// is too large to address.
pub fn pixel_address(x: u8, y: u16, modules: usize) -> Option<PixelAddress> {
    let x = x as usize;
    let y = y as usize;
    let rows = modules.checked_mul(ROWS_PER_MODULE)?;
    if x >= COLUMNS || y >= rows {
        return None;
    }

    // Row within the module's band; shift so y increases going down
    let row = y % ROWS_PER_MODULE;
    let module = y / ROWS_PER_MODULE;

    Some(PixelAddress {
        index: x + COLUMNS * module,
        mask: 0x80 >> row,
    })
}

/// In-memory mirror of the chain's column registers
///
/// Allocated once at construction and never resized. If the allocation
/// fails the buffer stays unallocated and every operation is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: Option<Vec<u8>>,
    modules: usize,
}

impl FrameBuffer {
    /// Allocate a zeroed buffer for `modules` stacked modules
    ///
    /// A module count whose byte size overflows `usize` is treated like a
    /// failed allocation.
    pub fn new(modules: usize) -> Self {
        Self {
            bytes: modules.checked_mul(COLUMNS).and_then(Self::allocate),
            modules,
        }
    }

    /// A buffer whose allocation failed
    pub const fn unallocated(modules: usize) -> Self {
        Self {
            bytes: None,
            modules,
        }
    }

    fn allocate(len: usize) -> Option<Vec<u8>> {
        let mut bytes = Vec::new();
        if bytes.try_reserve_exact(len).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("frame buffer allocation of {} bytes failed", len);
            return None;
        }
        bytes.resize(len, 0);
        Some(bytes)
    }

    /// Check if the backing storage exists
    pub fn is_allocated(&self) -> bool {
        self.bytes.is_some()
    }

    /// Number of stacked modules
    pub fn modules(&self) -> usize {
        self.modules
    }

    /// Width in pixels
    pub fn width(&self) -> u8 {
        COLUMNS as u8
    }

    /// Height in pixels across all modules
    ///
    /// Saturates at `u16::MAX`, the largest row a caller can name.
    pub fn height(&self) -> u16 {
        self.modules
            .checked_mul(ROWS_PER_MODULE)
            .and_then(|rows| u16::try_from(rows).ok())
            .unwrap_or(u16::MAX)
    }

    /// Set or clear one pixel
    ///
    /// Returns `false` without touching anything when the coordinate is
    /// out of range or the buffer is unallocated.
    pub fn set_pixel(&mut self, x: u8, y: u16, on: bool) -> bool {
        let Some(bytes) = self.bytes.as_mut() else {
            return false;
        };
        let Some(addr) = pixel_address(x, y, self.modules) else {
            #[cfg(feature = "defmt")]
            defmt::trace!("pixel ({}, {}) out of range", x, y);
            return false;
        };
        let Some(byte) = bytes.get_mut(addr.index) else {
            return false;
        };

        if on {
            *byte |= addr.mask;
        } else {
            *byte &= !addr.mask;
        }
        true
    }

    /// Read one pixel back from memory
    pub fn pixel(&self, x: u8, y: u16) -> Option<bool> {
        let bytes = self.bytes.as_ref()?;
        let addr = pixel_address(x, y, self.modules)?;
        bytes.get(addr.index).map(|b| b & addr.mask != 0)
    }

    /// Bytes of column `col` in chip-position order
    ///
    /// Yields `buffer[col + 8 * chip]` for chip 0..modules. Empty when the
    /// buffer is unallocated or `col >= 8`.
    pub fn column(&self, col: u8) -> impl Iterator<Item = u8> + '_ {
        let col = col as usize;
        let bytes: &[u8] = match &self.bytes {
            Some(bytes) if col < COLUMNS => bytes.as_slice(),
            _ => &[],
        };
        bytes.iter().skip(col).step_by(COLUMNS).copied()
    }

    /// Zero every byte
    pub fn clear(&mut self) {
        if let Some(bytes) = self.bytes.as_mut() {
            bytes.fill(0);
        }
    }

    /// Raw buffer contents (empty when unallocated)
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_pixel_address() {
        assert_eq!(
            pixel_address(0, 0, 4),
            Some(PixelAddress {
                index: 0,
                mask: 0x80
            })
        );
        assert_eq!(
            pixel_address(3, 17, 4),
            Some(PixelAddress {
                index: 19,
                mask: 0x40
            })
        );
        assert_eq!(
            pixel_address(7, 31, 4),
            Some(PixelAddress {
                index: 31,
                mask: 0x01
            })
        );
    }

    #[test]
    fn test_pixel_address_out_of_range() {
        assert_eq!(pixel_address(8, 0, 4), None);
        assert_eq!(pixel_address(0, 32, 4), None);
        assert_eq!(pixel_address(0, 8, 1), None);
        assert_eq!(pixel_address(0, 0, 0), None);
    }

    #[test]
    fn test_huge_module_count() {
        assert_eq!(pixel_address(0, 0, usize::MAX), None);
        assert_eq!(pixel_address(0, 0, usize::MAX / 8 + 1), None);

        let mut buffer = FrameBuffer::new(usize::MAX);
        assert!(!buffer.is_allocated());
        assert!(!buffer.set_pixel(0, 0, true));
        assert_eq!(buffer.height(), u16::MAX);

        // 8192 modules is 65536 rows, one past what a u16 can hold
        assert_eq!(FrameBuffer::unallocated(8192).height(), u16::MAX);
        assert_eq!(FrameBuffer::unallocated(8191).height(), 65528);
    }

    #[test]
    fn test_new_buffer_is_zeroed() {
        let buffer = FrameBuffer::new(4);
        assert!(buffer.is_allocated());
        assert_eq!(buffer.as_bytes(), &[0u8; 32][..]);
        assert_eq!(buffer.width(), 8);
        assert_eq!(buffer.height(), 32);
    }

    #[test]
    fn test_set_and_clear_pixel() {
        let mut buffer = FrameBuffer::new(4);

        assert!(buffer.set_pixel(3, 17, true));
        assert_eq!(buffer.as_bytes()[19], 0x40);
        assert_eq!(buffer.pixel(3, 17), Some(true));

        // Neighbouring bit in the same byte is independent
        assert!(buffer.set_pixel(3, 16, true));
        assert_eq!(buffer.as_bytes()[19], 0xC0);

        assert!(buffer.set_pixel(3, 17, false));
        assert_eq!(buffer.as_bytes()[19], 0x80);
        assert_eq!(buffer.pixel(3, 17), Some(false));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut buffer = FrameBuffer::new(4);
        assert!(!buffer.set_pixel(8, 0, true));
        assert!(!buffer.set_pixel(0, 32, true));
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(buffer.pixel(8, 0), None);
    }

    #[test]
    fn test_column_in_chip_order() {
        let mut buffer = FrameBuffer::new(4);
        buffer.set_pixel(2, 0, true); // module 0, top row
        buffer.set_pixel(2, 15, true); // module 1, bottom row
        buffer.set_pixel(2, 31, true); // module 3, bottom row

        let column: vec::Vec<u8> = buffer.column(2).collect();
        assert_eq!(column, vec![0x80, 0x01, 0x00, 0x01]);

        assert_eq!(buffer.column(8).count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut buffer = FrameBuffer::new(2);
        buffer.set_pixel(0, 0, true);
        buffer.set_pixel(7, 15, true);
        buffer.clear();
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(buffer.as_bytes().len(), 16);
    }

    #[test]
    fn test_unallocated_is_inert() {
        let mut buffer = FrameBuffer::unallocated(4);
        assert!(!buffer.is_allocated());
        assert!(!buffer.set_pixel(0, 0, true));
        assert_eq!(buffer.pixel(0, 0), None);
        assert_eq!(buffer.column(0).count(), 0);
        buffer.clear();
        assert!(buffer.as_bytes().is_empty());
    }
}
