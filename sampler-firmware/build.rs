//! Build script for sampler-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and compiles it into `board_config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use sampler_hal_stm32g0::adc::{self, SampleTime};

/// SysTick reload register is 24 bits wide
const MAX_TICK_PERIOD: i64 = 1 << 24;

/// Board settings after validation
struct Board {
    core_hz: u32,
    tick_hz: u32,
    led_pin: u8,
    adc_channel: u8,
    sample_time: SampleTime,
    max_polls: Option<u32>,
}

fn main() {
    setup_linker();
    let board = validate_config();
    write_board_config(&board);
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

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml at compile time
fn validate_config() -> Board {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml description file.            ║\n\
            ║  Please create one in the sampler-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let (core_hz, tick_hz) = validate_clock(&config, &mut errors);
    let led_pin = validate_indicator(&config, &mut errors);
    let (adc_channel, sample_time, max_polls) = validate_adc(&config, &mut errors);

    if !errors.is_empty() {
        report_errors("Invalid board configuration", &errors);
    }

    println!("cargo:warning=board.toml validated successfully");

    Board {
        core_hz,
        tick_hz,
        led_pin,
        adc_channel,
        sample_time,
        max_polls,
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Abort the build with a boxed list of errors
fn report_errors(title: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Look up `[section] key` as an integer
fn get_int(
    config: &toml::Value,
    section: &str,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<i64> {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(v)) => Some(*v),
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            None
        }
    }
}

/// Validate the [clock] section
fn validate_clock(config: &toml::Value, errors: &mut Vec<String>) -> (u32, u32) {
    let core_hz = get_int(config, "clock", "core_hz", errors);
    let tick_hz = get_int(config, "clock", "tick_hz", errors);

    let (Some(core_hz), Some(tick_hz)) = (core_hz, tick_hz) else {
        return (0, 0);
    };

    if core_hz <= 0 || core_hz > u32::MAX as i64 {
        errors.push("[clock] core_hz must be a positive 32-bit value".to_string());
        return (0, 0);
    }
    if tick_hz <= 0 || tick_hz > core_hz {
        errors.push("[clock] tick_hz must be between 1 and core_hz".to_string());
        return (0, 0);
    }

    let period = core_hz / tick_hz;
    if period > MAX_TICK_PERIOD {
        errors.push(format!(
            "[clock] tick period of {} cycles exceeds SysTick range",
            period
        ));
    }
    if core_hz % tick_hz != 0 {
        println!("cargo:warning=core_hz is not a multiple of tick_hz, ticks run slightly fast");
    }

    (core_hz as u32, tick_hz as u32)
}

/// Validate the [indicator] section
fn validate_indicator(config: &toml::Value, errors: &mut Vec<String>) -> u8 {
    let pin = match config.get("indicator").and_then(|s| s.get("pin")) {
        Some(toml::Value::String(pin)) => pin.clone(),
        Some(_) => {
            errors.push("[indicator] pin must be a string like \"PA5\"".to_string());
            return 0;
        }
        None => {
            errors.push("[indicator] missing 'pin'".to_string());
            return 0;
        }
    };

    match parse_porta_pin(&pin) {
        Some(n) => n,
        None => {
            errors.push(format!("[indicator] pin '{}' is not PA0..PA15", pin));
            0
        }
    }
}

/// Parse "PA<n>" into a pin number
fn parse_porta_pin(s: &str) -> Option<u8> {
    let number = s.trim().strip_prefix("PA")?;
    let pin: u8 = number.parse().ok()?;
    (pin <= 15).then_some(pin)
}

/// Parse a sampling time such as "160.5" into tenths of a cycle
fn parse_cycles_x10(s: &str) -> Option<u16> {
    let (whole, tenths) = s.trim().split_once('.')?;
    if tenths.len() != 1 {
        return None;
    }
    let whole: u16 = whole.parse().ok()?;
    let tenths: u16 = tenths.parse().ok()?;
    whole.checked_mul(10)?.checked_add(tenths)
}

/// Validate the [adc] section
fn validate_adc(
    config: &toml::Value,
    errors: &mut Vec<String>,
) -> (u8, SampleTime, Option<u32>) {
    // Only port A pins get their clock enabled for the analog input
    let channel = match get_int(config, "adc", "channel", errors) {
        Some(c) if u8::try_from(c).ok().and_then(adc::gpioa_pin).is_some() => c as u8,
        Some(c) => {
            errors.push(format!(
                "[adc] channel {} is not on port A (0-{})",
                c,
                adc::MAX_GPIOA_CHANNEL
            ));
            0
        }
        None => 0,
    };

    let sample_time = match config.get("adc").and_then(|s| s.get("sample_time")) {
        Some(toml::Value::String(s)) => {
            match parse_cycles_x10(s).and_then(SampleTime::from_cycles_x10) {
                Some(time) => time,
                None => {
                    errors.push(format!("[adc] unknown sample_time '{}'", s));
                    SampleTime::default()
                }
            }
        }
        Some(_) => {
            errors.push("[adc] sample_time must be a string like \"160.5\"".to_string());
            SampleTime::default()
        }
        // Slowest setting when not specified
        None => SampleTime::default(),
    };

    let max_polls = match config.get("adc").and_then(|s| s.get("max_polls")) {
        Some(toml::Value::String(s)) if s == "forever" => None,
        Some(toml::Value::Integer(n)) if *n > 0 && *n <= u32::MAX as i64 => Some(*n as u32),
        Some(_) => {
            errors.push("[adc] max_polls must be \"forever\" or a positive integer".to_string());
            None
        }
        None => None,
    };

    (channel, sample_time, max_polls)
}

/// Write the validated board description as Rust constants
fn write_board_config(board: &Board) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("board_config.rs")).unwrap();

    let wait = match board.max_polls {
        Some(n) => format!("WaitPolicy::Polls({})", n),
        None => "WaitPolicy::Forever".to_string(),
    };

    writeln!(f, "// Generated from board.toml by build.rs").unwrap();
    writeln!(f, "pub const CORE_CLOCK_HZ: u32 = {};", board.core_hz).unwrap();
    writeln!(f, "pub const TICK_HZ: u32 = {};", board.tick_hz).unwrap();
    writeln!(f, "pub const LED_PIN: u8 = {};", board.led_pin).unwrap();
    writeln!(f, "pub const ADC_CHANNEL: u8 = {};", board.adc_channel).unwrap();
    writeln!(
        f,
        "pub const SAMPLE_TIME: SampleTime = SampleTime::{:?};",
        board.sample_time
    )
    .unwrap();
    writeln!(f, "pub const WAIT_POLICY: WaitPolicy = {};", wait).unwrap();
}
