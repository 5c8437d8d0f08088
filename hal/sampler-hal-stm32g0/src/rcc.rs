//! Reset and clock control (RCC)
//!
//! Only the peripheral clock enable registers used by the firmware are
//! described.

use sampler_hal::{Field, Register};

/// RCC base address
pub const RCC_BASE: u32 = 0x4002_1000;

/// I/O port clock enable register
pub const IOPENR: Register = Register::at("RCC_IOPENR", RCC_BASE, 0x34);

/// APB peripheral clock enable register 2
pub const APBENR2: Register = Register::at("RCC_APBENR2", RCC_BASE, 0x40);

/// RCC_IOPENR fields
pub mod iopenr {
    use super::Field;

    /// GPIOA clock enable
    pub const GPIOAEN: Field = Field::bit(0);
}

/// RCC_APBENR2 fields
pub mod apbenr2 {
    use super::Field;

    /// ADC clock enable
    pub const ADCEN: Field = Field::bit(20);
}
