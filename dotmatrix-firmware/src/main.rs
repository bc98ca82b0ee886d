//! Dotmatrix - stacked MAX7219 LED matrix firmware
//!
//! Loads the wiring from the embedded matrix.toml, brings the chain up
//! and runs a one-shot test pattern so a freshly wired display can be
//! checked by eye.

#![no_std]
#![no_main]

extern crate alloc;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Timer;
use embedded_alloc::LlffHeap as Heap;
use {defmt_rtt as _, panic_probe as _};

use dotmatrix_core::config::{parse_config, MatrixConfig};
use dotmatrix_drivers::{DotMatrix, PinPort};

use crate::pins::PinBank;

mod pins;

// Heap for the frame buffer
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 8KB
const HEAP_SIZE: usize = 8 * 1024;

/// Embedded wiring (compiled into firmware)
/// Edit matrix.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../matrix.toml");

/// Delay between rows of the test pattern
const SWEEP_STEP_MS: u64 = 25;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Dotmatrix firmware starting...");

    init_heap();

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    let mut bank = PinBank::new(p);

    let (data, clock, load) = match (
        bank.take(config.data_pin.pin),
        bank.take(config.clock_pin.pin),
        bank.take(config.load_pin.pin),
    ) {
        (Ok(data), Ok(clock), Ok(load)) => (data, clock, load),
        _ => {
            error!("Configured pins unavailable, halting");
            loop {
                Timer::after_secs(60).await;
            }
        }
    };

    let port = PinPort::from_config(
        &config,
        Output::new(data, Level::Low),
        Output::new(clock, Level::Low),
        Output::new(load, Level::Low),
    );
    let mut matrix = DotMatrix::new(port, &config);
    if !matrix.buffer().is_allocated() {
        warn!("Frame buffer allocation failed, display is inert");
    }
    info!(
        "Display '{}' ready: {} modules",
        config.name.as_str(),
        matrix.modules()
    );

    self_test(&mut matrix).await;
    info!("Self-test complete");

    loop {
        Timer::after_secs(60).await;
    }
}

/// Light the display one row at a time, top to bottom, then clear it
async fn self_test<G: dotmatrix_hal::GpioPort>(matrix: &mut DotMatrix<G>) {
    let height = matrix.buffer().height();
    for y in 0..height {
        for x in 0..8 {
            matrix.write(x, y, true);
        }
        Timer::after_millis(SWEEP_STEP_MS).await;
    }
    Timer::after_millis(500).await;
    matrix.clear();
}

fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}

/// Parse the embedded configuration
///
/// build.rs already rejects a broken matrix.toml, so the fallback only
/// triggers if the parser and the build-time check disagree.
fn load_config() -> MatrixConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded configuration from TOML");
            config
        }
        Err(e) => {
            warn!("Failed to parse matrix.toml: {:?}, using defaults", e);
            MatrixConfig::default()
        }
    }
}
