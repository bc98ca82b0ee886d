//! Recording GPIO port for tests
//!
//! Records every line event and can replay them through a model of the
//! MAX7219 shift register to recover the latched frames.

use alloc::vec::Vec;

use dotmatrix_hal::{GpioPort, Level};

/// Pins used by the tests
pub const DATA: u8 = 2;
pub const CLOCK: u8 = 3;
pub const LOAD: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Configure(u8),
    Set(u8, Level),
}

/// GPIO port that records every call
#[derive(Debug, Default)]
pub struct RecordingPort {
    pub events: Vec<Event>,
}

impl RecordingPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.events.clear();
    }

    /// Number of `set_line` calls
    pub fn transitions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Set(..)))
            .count()
    }

    /// Pins configured as outputs, in call order
    pub fn configured(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Configure(pin) => Some(*pin),
                Event::Set(..) => None,
            })
            .collect()
    }

    /// Levels written to one pin, in call order
    pub fn levels(&self, pin: u8) -> Vec<Level> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Set(p, level) if *p == pin => Some(*level),
                _ => None,
            })
            .collect()
    }

    /// Replay the events through the chain's shift register
    ///
    /// Each returned frame holds the (register, data) pairs shifted in
    /// during one load pulse, in the order they were sent.
    pub fn frames(&self) -> Vec<Vec<(u8, u8)>> {
        let mut frames = Vec::new();
        let mut bits: Vec<bool> = Vec::new();
        let mut data = Level::Low;
        let mut clock = Level::Low;
        let mut load = Level::Low;

        for event in &self.events {
            let Event::Set(pin, level) = *event else {
                continue;
            };
            match pin {
                DATA => data = level,
                CLOCK => {
                    if clock.is_low() && level.is_high() {
                        bits.push(data.is_high());
                    }
                    clock = level;
                }
                LOAD => {
                    if load.is_low() && level.is_high() {
                        frames.push(pairs(&bits));
                        bits.clear();
                    }
                    load = level;
                }
                _ => {}
            }
        }
        frames
    }
}

fn pairs(bits: &[bool]) -> Vec<(u8, u8)> {
    let bytes: Vec<u8> = bits
        .chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect();
    bytes.chunks(2).map(|p| (p[0], p[1])).collect()
}

impl GpioPort for RecordingPort {
    fn configure_as_output(&mut self, pin: u8) {
        self.events.push(Event::Configure(pin));
    }

    fn set_line(&mut self, pin: u8, level: Level) {
        self.events.push(Event::Set(pin, level));
    }
}
