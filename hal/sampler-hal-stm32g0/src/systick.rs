//! SysTick timer and exception priority
//!
//! SysTick is an ARMv6-M core peripheral, so its addresses are the same on
//! every Cortex-M0+ part.

use sampler_hal::{Field, Register};

/// SysTick base address
pub const SYST_BASE: u32 = 0xE000_E010;

/// Control and status register
pub const CTRL: Register = Register::at("SYST_CSR", SYST_BASE, 0x00);
/// Reload value register
pub const LOAD: Register = Register::at("SYST_RVR", SYST_BASE, 0x04);
/// Current value register
pub const VAL: Register = Register::at("SYST_CVR", SYST_BASE, 0x08);

/// System handler priority register 3 (PendSV and SysTick)
pub const SHPR3: Register = Register::new("SCB_SHPR3", 0xE000_ED20);

/// Implemented priority bits on Cortex-M0+
pub const NVIC_PRIO_BITS: u8 = 2;

/// Largest value LOAD can hold
pub const MAX_RELOAD: u32 = 0x00FF_FFFF;

/// SYST_CSR fields
pub mod ctrl {
    use super::Field;

    /// Counter enable
    pub const ENABLE: Field = Field::bit(0);
    /// Raise the SysTick exception when the counter reaches zero
    pub const TICKINT: Field = Field::bit(1);
    /// Clock source (1 = processor clock)
    pub const CLKSOURCE: Field = Field::bit(2);
    /// Counter reached zero since last read
    pub const COUNTFLAG: Field = Field::bit(16);
}

/// SYST_RVR fields
pub mod load {
    use super::Field;

    /// Value loaded into VAL when the counter reaches zero
    pub const RELOAD: Field = Field::new(0, 24);
}

/// SCB_SHPR3 fields
pub mod shpr3 {
    use super::Field;

    /// SysTick exception priority (only the top `NVIC_PRIO_BITS` are implemented)
    pub const PRI_15: Field = Field::new(24, 8);
}

/// Encode a logical priority level into the implemented priority bits
///
/// Level 0 is the most urgent; `(1 << NVIC_PRIO_BITS) - 1` the least.
pub const fn encode_priority(level: u8) -> u32 {
    ((level as u32) << (8 - NVIC_PRIO_BITS)) & 0xFF
}

/// Least urgent priority level
pub const LOWEST_PRIORITY: u8 = (1 << NVIC_PRIO_BITS) - 1;
