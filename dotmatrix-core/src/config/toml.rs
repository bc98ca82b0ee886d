//! Simple TOML parser for the matrix configuration
//!
//! Handles only the subset the wiring file needs, not the whole TOML
//! language.
//!
//! Supported features:
//! - Key = value pairs (basic or literal string, integer)
//! - Section headers, only `[matrix]` is read
//! - Comments (# ...), whole-line or trailing
//!
//! ```toml
//! [matrix]
//! name = "front"      # optional
//! data = "gpio2"
//! clock = "gpio3"
//! load = "gpio4"
//! modules = 4         # optional, default 4
//! intensity = 2       # optional, default 2
//! ```

use super::hardware::{parse_pin_string, ConfigError, MatrixConfig, PinConfig};

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Matrix,
    /// Section this parser does not know; its keys are skipped
    Other,
}

/// Parse and validate a TOML configuration into a [`MatrixConfig`]
///
/// The `[matrix]` section and its three pin keys are required.
pub fn parse_config(input: &str) -> Result<MatrixConfig, ConfigError> {
    let mut config = MatrixConfig::default();
    let mut section = Section::Root;
    let mut seen_matrix = false;
    let (mut data, mut clock, mut load) = (None, None, None);

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            let header = line
                .strip_suffix(']')
                .ok_or(ConfigError::Parse)?
                .trim_start_matches('[')
                .trim();
            section = if header == "matrix" {
                seen_matrix = true;
                Section::Matrix
            } else {
                Section::Other
            };
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::Parse)?;
        if section != Section::Matrix {
            continue;
        }

        match key {
            "name" => {
                config.name.clear();
                // Long names are truncated to the label capacity
                for ch in parse_string(value)?.chars() {
                    if config.name.push(ch).is_err() {
                        break;
                    }
                }
            }
            "data" => data = Some(parse_pin(value)?),
            "clock" => clock = Some(parse_pin(value)?),
            "load" => load = Some(parse_pin(value)?),
            "modules" => config.modules = parse_int(value)?,
            "intensity" => config.intensity = parse_int(value)?,
            _ => {}
        }
    }

    if !seen_matrix {
        return Err(ConfigError::Parse);
    }
    let (Some(data), Some(clock), Some(load)) = (data, clock, load) else {
        return Err(ConfigError::InvalidPin);
    };
    config.data_pin = data;
    config.clock_pin = clock;
    config.load_pin = load;

    config.validate()?;
    Ok(config)
}

/// Cut a line at the first `#` that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    for (pos, ch) in line.char_indices() {
        match (quote, ch) {
            (None, '#') => return &line[..pos],
            (None, '"' | '\'') => quote = Some(ch),
            (Some(open), _) if ch == open => quote = None,
            _ => {}
        }
    }
    line
}

/// Split `key = value`, dropping an inline comment
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let line = strip_comment(line);
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a basic (`"..."`) or literal (`'...'`) string value
fn parse_string(value: &str) -> Result<&str, ConfigError> {
    ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q)?.strip_suffix(q))
        .ok_or(ConfigError::Parse)
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Parse)
}

fn parse_pin(value: &str) -> Result<PinConfig, ConfigError> {
    parse_pin_string(parse_string(value)?)
        .map(PinConfig::new)
        .ok_or(ConfigError::InvalidPin)
}
