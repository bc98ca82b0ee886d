//! MAX7219 register map
//!
//! Every frame shifted into a MAX7219 is a 16-bit word: an address byte
//! followed by a data byte. The address selects one of the registers below.
//!
//! # Column wiring
//!
//! The digit registers 0x01-0x08 hold one 8-bit column each. On the stacked
//! modules this driver targets, the digits are wired right to left, so
//! logical column `c` lives in digit register `8 - c`.

use crate::buffer::COLUMNS;

/// MAX7219 register addresses
pub mod reg {
    /// No-op, the chip ignores the data byte
    pub const NOOP: u8 = 0x00;
    /// Digit 0 (column data)
    pub const DIGIT0: u8 = 0x01;
    /// Digit 1
    pub const DIGIT1: u8 = 0x02;
    /// Digit 2
    pub const DIGIT2: u8 = 0x03;
    /// Digit 3
    pub const DIGIT3: u8 = 0x04;
    /// Digit 4
    pub const DIGIT4: u8 = 0x05;
    /// Digit 5
    pub const DIGIT5: u8 = 0x06;
    /// Digit 6
    pub const DIGIT6: u8 = 0x07;
    /// Digit 7
    pub const DIGIT7: u8 = 0x08;
    /// Code-B decode enable per digit
    pub const DECODE_MODE: u8 = 0x09;
    /// PWM brightness (low nibble)
    pub const INTENSITY: u8 = 0x0A;
    /// Number of scanned digits minus one
    pub const SCAN_LIMIT: u8 = 0x0B;
    /// Shutdown / normal operation
    pub const SHUTDOWN: u8 = 0x0C;
    /// Display test (all LEDs on)
    pub const DISPLAY_TEST: u8 = 0x0F;
}

/// Highest valid intensity value
pub const MAX_INTENSITY: u8 = 0x0F;

/// Scan limit value that enables all 8 digits
pub const SCAN_ALL_DIGITS: u8 = 0x07;

/// Translate a logical column into its digit register address
///
/// Returns `None` for `col >= 8`.
pub const fn digit_register(col: u8) -> Option<u8> {
    if (col as usize) < COLUMNS {
        Some(reg::DIGIT7 - col)
    } else {
        None
    }
}

/// Decode modes for the DECODE_MODE register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeMode {
    /// Raw pixel bits, no Code-B font lookup
    #[default]
    NoDecode = 0x00,
}

/// Values for the SHUTDOWN register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShutdownMode {
    /// Display blanked, register contents retained
    Shutdown = 0x00,
    /// Normal operation
    #[default]
    Normal = 0x01,
}

/// Register values written once when the driver is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplaySettings {
    /// Brightness, 0-15
    pub intensity: u8,
    /// Number of scanned digits minus one
    pub scan_limit: u8,
    /// Power mode
    pub shutdown: ShutdownMode,
    /// Digit decoding
    pub decode_mode: DecodeMode,
    /// Light every LED regardless of digit data
    pub display_test: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            intensity: 0x02,
            scan_limit: SCAN_ALL_DIGITS,
            shutdown: ShutdownMode::Normal,
            decode_mode: DecodeMode::NoDecode,
            display_test: false,
        }
    }
}

impl DisplaySettings {
    /// Settings with a custom brightness
    pub fn with_intensity(intensity: u8) -> Self {
        Self {
            intensity,
            ..Self::default()
        }
    }

    /// Register writes in power-on order
    ///
    /// Intensity comes first, then scan limit, shutdown, decode mode and
    /// display test. Intensity is masked to its low nibble.
    pub fn register_writes(&self) -> [(u8, u8); 5] {
        [
            (reg::INTENSITY, self.intensity & MAX_INTENSITY),
            (reg::SCAN_LIMIT, self.scan_limit & 0x07),
            (reg::SHUTDOWN, self.shutdown as u8),
            (reg::DECODE_MODE, self.decode_mode as u8),
            (reg::DISPLAY_TEST, self.display_test as u8),
        ]
    }
}
