//! Dotmatrix Hardware Abstraction Layer
//!
//! This crate defines the GPIO capability the display driver needs from
//! its host. Anything that can configure a numbered pin as an output and
//! drive it high or low can run the driver: a direct register poke, an OS
//! GPIO syscall, or a recording stub in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (dotmatrix-firmware, etc.) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dotmatrix-drivers (MAX7219 cascade)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dotmatrix-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::GpioPort`] - Numbered digital output lines

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{GpioPort, Level};
