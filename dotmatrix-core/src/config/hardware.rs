//! Hardware configuration types
//!
//! These types define the wiring of a MAX7219 chain: the three control
//! lines and the number of cascaded modules.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::MAX_MODULES;
use crate::registers::{DisplaySettings, MAX_INTENSITY};

/// Number of GPIO lines addressable by pin strings
pub const GPIO_COUNT: u8 = 30;

/// Maximum length of a display name
pub const MAX_LABEL_LEN: usize = 16;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Two control lines share a pin
    DuplicatePin,
    /// Module count is zero or above the chain limit
    InvalidModuleCount,
    /// Intensity above 15
    InvalidIntensity,
    /// Pin string could not be parsed
    InvalidPin,
    /// Malformed configuration document
    Parse,
}

/// GPIO line used by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// Logical GPIO pin number
    pub pin: u8,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self { pin }
    }
}

/// Wiring and power-on settings of one MAX7219 chain
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatrixConfig {
    /// Display name, for logs
    pub name: String<MAX_LABEL_LEN>,
    /// Serial data line (DIN)
    pub data_pin: PinConfig,
    /// Shift clock line (CLK), data shifts in on the rising edge
    pub clock_pin: PinConfig,
    /// Load/latch line (CS), data latches on the rising edge
    pub load_pin: PinConfig,
    /// Number of cascaded modules
    pub modules: u8,
    /// Power-on brightness, 0-15
    pub intensity: u8,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self::new(2, 3, 4)
    }
}

impl MatrixConfig {
    /// Default number of stacked modules
    pub const DEFAULT_MODULES: u8 = 4;

    /// Create a config for the given data, clock and load pins
    ///
    /// Uses a 4-module chain at intensity 2.
    pub fn new(data: u8, clock: u8, load: u8) -> Self {
        let mut name = String::new();
        let _ = name.push_str("matrix");
        Self {
            name,
            data_pin: PinConfig::new(data),
            clock_pin: PinConfig::new(clock),
            load_pin: PinConfig::new(load),
            modules: Self::DEFAULT_MODULES,
            intensity: DisplaySettings::default().intensity,
        }
    }

    /// Set the number of cascaded modules
    pub fn with_modules(mut self, modules: u8) -> Self {
        self.modules = modules;
        self
    }

    /// Set the power-on brightness
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity;
        self
    }

    /// Check the wiring for conflicts and out-of-range values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (d, c, l) = (self.data_pin.pin, self.clock_pin.pin, self.load_pin.pin);
        if d == c || d == l || c == l {
            return Err(ConfigError::DuplicatePin);
        }
        if self.modules == 0 || self.modules as usize > MAX_MODULES {
            return Err(ConfigError::InvalidModuleCount);
        }
        if self.intensity > MAX_INTENSITY {
            return Err(ConfigError::InvalidIntensity);
        }
        Ok(())
    }

    /// Register settings written at construction
    pub fn settings(&self) -> DisplaySettings {
        DisplaySettings::with_intensity(self.intensity)
    }
}

/// Parse a pin string from config
///
/// Supports the host GPIO naming: "gpio11" -> 11.
pub fn parse_pin_string(s: &str) -> Option<u8> {
    let num_str = s.trim().strip_prefix("gpio")?;
    let pin: u8 = num_str.parse().ok()?;

    if pin >= GPIO_COUNT {
        return None;
    }

    Some(pin)
}
