//! Build script for dotmatrix-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates matrix.toml at compile time

use std::collections::HashSet;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Highest module count the driver accepts
const MAX_MODULES: i64 = 16;

/// GPIO lines on the RP2040
const GPIO_COUNT: u32 = 30;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate matrix.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=matrix.toml");

    let config_path = Path::new("matrix.toml");
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: matrix.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds its wiring from matrix.toml.                ║\n\
            ║  Please create one in the dotmatrix-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!("Failed to read matrix.toml: {}", e),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in matrix.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let errors = validate_matrix(&config);
    if !errors.is_empty() {
        let lines: Vec<String> = errors.iter().map(|e| format!("- {}", e)).collect();
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid [matrix] section in matrix.toml                  ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&lines.join("\n"))
        );
    }

    println!("cargo:warning=matrix.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a "gpioN" pin string
fn parse_pin(value: Option<&toml::Value>) -> Option<u32> {
    let num = value?.as_str()?.trim().strip_prefix("gpio")?;
    let pin: u32 = num.parse().ok()?;
    (pin < GPIO_COUNT).then_some(pin)
}

/// Validate the [matrix] section
fn validate_matrix(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(matrix) = config.get("matrix") else {
        errors.push("Missing [matrix] section".to_string());
        return errors;
    };

    let mut used = HashSet::new();
    for key in ["data", "clock", "load"] {
        match parse_pin(matrix.get(key)) {
            Some(pin) => {
                if !used.insert(pin) {
                    errors.push(format!("'{}' reuses gpio{}", key, pin));
                }
            }
            None => errors.push(format!("'{}' must be a pin like \"gpio2\"", key)),
        }
    }

    if let Some(modules) = matrix.get("modules") {
        match modules.as_integer() {
            Some(n) if (1..=MAX_MODULES).contains(&n) => {}
            _ => errors.push(format!("'modules' must be 1-{}", MAX_MODULES)),
        }
    }

    if let Some(intensity) = matrix.get("intensity") {
        match intensity.as_integer() {
            Some(n) if (0..=15).contains(&n) => {}
            _ => errors.push("'intensity' must be 0-15".to_string()),
        }
    }

    errors
}
