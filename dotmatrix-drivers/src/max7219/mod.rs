//! MAX7219 cascade driver
//!
//! # Wiring
//!
//! All chips share the data, clock and load lines. Data shifts in on the
//! rising edge of the clock and passes through each chip's 16-bit shift
//! register to the next one. A rising edge on load latches whatever word
//! sits in each chip's shift register.
//!
//! ```text
//!   DIN ──► [chip 0] ──► [chip 1] ──► ... ──► [chip N-1]
//!   CLK ─────┴────────────┴──────────────────────┘
//!   LOAD ────┴────────────┴──────────────────────┘
//! ```
//!
//! Writing one register on every chip therefore means shifting N
//! (register, data) pairs inside a single load pulse.

pub mod matrix;
pub mod protocol;
pub mod serial;

pub use matrix::DotMatrix;
pub use protocol::RegisterBus;
pub use serial::ShiftOut;
