//! Configuration types
//!
//! Describes how a chain is wired (which GPIO lines, how many modules)
//! and the construction-time register settings.

pub mod hardware;
pub mod toml;

pub use hardware::{
    parse_pin_string, ConfigError, MatrixConfig, PinConfig, GPIO_COUNT, MAX_LABEL_LEN,
};
pub use self::toml::parse_config;
