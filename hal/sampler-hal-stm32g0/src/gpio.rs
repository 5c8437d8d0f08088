//! GPIO port A registers
//!
//! Per-pin fields are computed from the pin number, so the same helpers
//! cover PA0 (ADC_IN0) and PA5 (LD4).

use sampler_hal::{Field, Register};

/// GPIOA base address (IOPORT bus)
pub const GPIOA_BASE: u32 = 0x5000_0000;

/// Number of pins on a GPIO port
pub const PINS_PER_PORT: u8 = 16;

/// Port mode register
pub const MODER: Register = Register::at("GPIOA_MODER", GPIOA_BASE, 0x00);
/// Output type register
pub const OTYPER: Register = Register::at("GPIOA_OTYPER", GPIOA_BASE, 0x04);
/// Output speed register
pub const OSPEEDR: Register = Register::at("GPIOA_OSPEEDR", GPIOA_BASE, 0x08);
/// Pull-up/pull-down register
pub const PUPDR: Register = Register::at("GPIOA_PUPDR", GPIOA_BASE, 0x0C);
/// Input data register
pub const IDR: Register = Register::at("GPIOA_IDR", GPIOA_BASE, 0x10);
/// Output data register
pub const ODR: Register = Register::at("GPIOA_ODR", GPIOA_BASE, 0x14);
/// Bit set/reset register (write-only)
pub const BSRR: Register = Register::at("GPIOA_BSRR", GPIOA_BASE, 0x18);

/// Reset values of GPIOA (PA13/PA14 come up as SWD alternate functions)
pub mod reset {
    pub const MODER: u32 = 0xEBFF_FFFF;
    pub const OTYPER: u32 = 0x0000_0000;
    pub const OSPEEDR: u32 = 0x0C00_0000;
    pub const PUPDR: u32 = 0x2400_0000;
}

/// MODEy field of a pin
pub const fn mode(pin: u8) -> Field {
    Field::new(pin * 2, 2)
}

/// OTy field of a pin
pub const fn output_type(pin: u8) -> Field {
    Field::bit(pin)
}

/// OSPEEDy field of a pin
pub const fn speed(pin: u8) -> Field {
    Field::new(pin * 2, 2)
}

/// PUPDy field of a pin
pub const fn pull(pin: u8) -> Field {
    Field::new(pin * 2, 2)
}

/// ODy / IDy bit of a pin
pub const fn data(pin: u8) -> Field {
    Field::bit(pin)
}

/// BSy bit of a pin (drive high)
pub const fn bit_set(pin: u8) -> Field {
    Field::bit(pin)
}

/// BRy bit of a pin (drive low)
pub const fn bit_reset(pin: u8) -> Field {
    Field::bit(pin + PINS_PER_PORT)
}

/// Pin mode (MODEy encoding)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    Input = 0b00,
    Output = 0b01,
    Alternate = 0b10,
    /// Reset state of most pins
    Analog = 0b11,
}

/// Output driver type (OTy encoding)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OutputType {
    PushPull = 0,
    OpenDrain = 1,
}

/// Output slew rate (OSPEEDy encoding)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Speed {
    VeryLow = 0b00,
    Low = 0b01,
    High = 0b10,
    VeryHigh = 0b11,
}

/// Pull resistor (PUPDy encoding)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pull {
    None = 0b00,
    Up = 0b01,
    Down = 0b10,
}
