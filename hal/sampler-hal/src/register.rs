//! Register and bit field descriptions
//!
//! A [`Register`] is a named 32-bit location in the memory map. A [`Field`]
//! is a contiguous group of bits inside a register. Both are plain `Copy`
//! values so register maps can be declared as `const` items.

/// A memory-mapped 32-bit register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Register {
    /// Reference manual name, e.g. "ADC_CR"
    pub name: &'static str,
    /// Absolute address
    pub address: u32,
}

impl Register {
    /// Describe a register at an absolute address
    pub const fn new(name: &'static str, address: u32) -> Self {
        Self { name, address }
    }

    /// Describe a register at `offset` from a peripheral base address
    pub const fn at(name: &'static str, base: u32, offset: u32) -> Self {
        Self::new(name, base + offset)
    }
}

/// A bit field inside a register
///
/// Fields are at most 32 bits wide and must fit within the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    /// Position of the least significant bit
    pub offset: u8,
    /// Number of bits
    pub width: u8,
}

impl Field {
    /// Describe a field of `width` bits starting at `offset`
    pub const fn new(offset: u8, width: u8) -> Self {
        assert!(width > 0 && offset as u32 + width as u32 <= 32);
        Self { offset, width }
    }

    /// Describe a single-bit field
    pub const fn bit(offset: u8) -> Self {
        Self::new(offset, 1)
    }

    /// Mask of the field's bits in register position
    pub const fn mask(self) -> u32 {
        let ones = if self.width == 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        };
        ones << self.offset
    }

    /// Shift `value` into register position
    ///
    /// Bits of `value` that do not fit in the field are discarded.
    pub const fn encode(self, value: u32) -> u32 {
        (value << self.offset) & self.mask()
    }

    /// Extract the field's value from a raw register value
    pub const fn extract(self, raw: u32) -> u32 {
        (raw & self.mask()) >> self.offset
    }

    /// Largest value the field can hold
    pub const fn max_value(self) -> u32 {
        self.mask() >> self.offset
    }
}
