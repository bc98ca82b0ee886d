//! Hardware driver implementations
//!
//! This crate drives chains of MAX7219 LED matrix controllers over a
//! bit-banged 3-wire interface (data, clock, load):
//!
//! - Serial link primitive (MSB-first byte shifting)
//! - Register protocol (one latch pulse per chain-wide write)
//! - Display driver with an in-memory column mirror
//! - `embedded-hal` pin adapter

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod max7219;
pub mod port;

#[cfg(test)]
mod mock;

pub use max7219::{DotMatrix, RegisterBus, ShiftOut};
pub use port::PinPort;
