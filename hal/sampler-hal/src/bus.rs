//! Register bus abstraction
//!
//! Provides the trait every register access goes through, plus
//! read-modify-write helpers that only touch the bits they name.

use crate::register::{Field, Register};

/// Raw 32-bit register access
///
/// Implementations perform the actual load/store. On the target this is a
/// volatile access to the memory map; in tests it is a simulated register
/// file.
///
/// Both methods take `&mut self` because reads of some hardware registers
/// have side effects (reading ADC_DR clears EOC).
pub trait RegisterBus {
    /// Read the 32-bit value at `address`
    fn read(&mut self, address: u32) -> u32;

    /// Write a 32-bit value to `address`
    fn write(&mut self, address: u32, value: u32);
}

impl<B: RegisterBus + ?Sized> RegisterBus for &mut B {
    fn read(&mut self, address: u32) -> u32 {
        (**self).read(address)
    }

    fn write(&mut self, address: u32, value: u32) {
        (**self).write(address, value)
    }
}

/// Typed register operations
///
/// Implemented for every [`RegisterBus`]. `set_bits`, `clear_bits` and
/// `write_field` are read-modify-write: bits outside the mask keep their
/// current value.
pub trait RegisterBusExt: RegisterBus {
    /// Read a whole register
    fn read_reg(&mut self, reg: Register) -> u32 {
        self.read(reg.address)
    }

    /// Overwrite a whole register
    fn write_reg(&mut self, reg: Register, value: u32) {
        self.write(reg.address, value);
    }

    /// Read a register, transform the value, write it back
    fn modify<F>(&mut self, reg: Register, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(reg.address);
        self.write(reg.address, f(value));
    }

    /// Set every bit in `mask`
    fn set_bits(&mut self, reg: Register, mask: u32) {
        self.modify(reg, |v| v | mask);
    }

    /// Clear every bit in `mask`
    fn clear_bits(&mut self, reg: Register, mask: u32) {
        self.modify(reg, |v| v & !mask);
    }

    /// Replace the contents of one field
    fn write_field(&mut self, reg: Register, field: Field, value: u32) {
        self.modify(reg, |v| (v & !field.mask()) | field.encode(value));
    }

    /// Read the contents of one field
    fn read_field(&mut self, reg: Register, field: Field) -> u32 {
        field.extract(self.read(reg.address))
    }

    /// Check whether any bit of `field` is set
    fn is_set(&mut self, reg: Register, field: Field) -> bool {
        self.read(reg.address) & field.mask() != 0
    }
}

impl<B: RegisterBus + ?Sized> RegisterBusExt for B {}
