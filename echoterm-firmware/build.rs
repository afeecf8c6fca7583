//! Build script for echoterm-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates console.toml and compiles it into `console_config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Largest `.bss` sample the report may dump
const MAX_DUMP_BYTES: usize = 256;

const BAUD_RANGE: std::ops::RangeInclusive<u32> = 1_200..=921_600;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConsoleFile {
    console: ConsoleSection,
    #[serde(default)]
    uart: UartSection,
    #[serde(default)]
    report: ReportSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConsoleSection {
    program_name: String,
    welcome: String,
    diagnostic_value: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct UartSection {
    baudrate: u32,
    data_bits: u8,
    parity: String,
    stop_bits: u8,
}

impl Default for UartSection {
    fn default() -> Self {
        Self {
            baudrate: 115_200,
            data_bits: 8,
            parity: "none".to_string(),
            stop_bits: 1,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct ReportSection {
    dump_bytes: usize,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self { dump_bytes: 32 }
    }
}

fn main() {
    setup_linker();
    let config = load_config();
    validate(&config);
    generate(&config);
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

/// Read and parse console.toml
fn load_config() -> ConsoleFile {
    println!("cargo:rerun-if-changed=console.toml");

    let config_path = Path::new("console.toml");

    if !config_path.exists() {
        fail(
            "console.toml not found!",
            &["The firmware requires a console.toml file next to Cargo.toml.".to_string()],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read console.toml", &[e.to_string()]),
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            let lines: Vec<String> = e.to_string().lines().map(str::to_string).collect();
            fail("Invalid console.toml", &lines)
        }
    }
}

/// Check value ranges the types alone cannot express
fn validate(config: &ConsoleFile) {
    let mut errors = Vec::new();

    for (key, value) in [
        ("console.program_name", &config.console.program_name),
        ("console.welcome", &config.console.welcome),
    ] {
        if value.is_empty() {
            errors.push(format!("{} cannot be empty", key));
        }
        if value.chars().any(|c| c.is_control()) {
            errors.push(format!("{} cannot contain control characters", key));
        }
    }

    if !BAUD_RANGE.contains(&config.uart.baudrate) {
        errors.push(format!(
            "uart.baudrate must be {}-{}",
            BAUD_RANGE.start(),
            BAUD_RANGE.end()
        ));
    }
    if !matches!(config.uart.data_bits, 7 | 8) {
        errors.push("uart.data_bits must be 7 or 8".to_string());
    }
    if !["none", "even", "odd"].contains(&config.uart.parity.as_str()) {
        errors.push("uart.parity must be 'none', 'even', or 'odd'".to_string());
    }
    if !matches!(config.uart.stop_bits, 1 | 2) {
        errors.push("uart.stop_bits must be 1 or 2".to_string());
    }

    if config.report.dump_bytes > MAX_DUMP_BYTES {
        errors.push(format!("report.dump_bytes must be at most {}", MAX_DUMP_BYTES));
    }

    if !errors.is_empty() {
        let lines: Vec<String> = errors.iter().map(|e| format!("• {}", e)).collect();
        fail("Invalid console.toml configuration", &lines);
    }
}

/// Write `console_config.rs` into OUT_DIR
fn generate(config: &ConsoleFile) {
    let data_bits = match config.uart.data_bits {
        7 => "DataBits::Seven",
        _ => "DataBits::Eight",
    };
    let parity = match config.uart.parity.as_str() {
        "even" => "Parity::Even",
        "odd" => "Parity::Odd",
        _ => "Parity::None",
    };
    let stop_bits = match config.uart.stop_bits {
        2 => "StopBits::Two",
        _ => "StopBits::One",
    };

    let source = format!(
        "// Generated from console.toml by build.rs\n\
         \n\
         pub const CONSOLE: ConsoleConfig = ConsoleConfig::new({:?}, {:?}, {:#010X});\n\
         \n\
         pub const UART: UartConfig = UartConfig {{\n    \
             baudrate: {},\n    \
             data_bits: {},\n    \
             parity: {},\n    \
             stop_bits: {},\n\
         }};\n\
         \n\
         pub const DUMP_BYTES: usize = {};\n",
        config.console.program_name,
        config.console.welcome,
        config.console.diagnostic_value,
        config.uart.baudrate,
        data_bits,
        parity,
        stop_bits,
        config.report.dump_bytes,
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("console_config.rs"), source).unwrap();
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(lines)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.clone()
            };
            format!("║  {:<64}║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
