//! Board-agnostic core logic for the dotmatrix driver
//!
//! This crate contains everything that does not touch a GPIO line:
//!
//! - MAX7219 register map and fixed power-on settings
//! - Display buffer mirroring on-chip column SRAM, and the pixel mapper
//! - The pixel-level display trait
//! - Configuration types and the matrix.toml parser

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod buffer;
pub mod config;
pub mod registers;
pub mod traits;

pub use buffer::{pixel_address, FrameBuffer, PixelAddress};
pub use config::{ConfigError, MatrixConfig};
pub use registers::DisplaySettings;
pub use traits::PixelDisplay;
