//! Hardware abstraction traits
//!
//! These traits define the interface between application code and the
//! display driver.

pub mod display;

pub use display::PixelDisplay;
