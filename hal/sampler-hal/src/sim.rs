//! Simulated register bus for host-side tests
//!
//! [`SimBus`] stores register values in a fixed-capacity map. Unwritten
//! registers read as zero unless preset. Hardware behaviour (flags that clear
//! themselves, conversions that complete after a few polls) is plugged in
//! through the [`SimHardware`] trait.
//!
//! The register file holds at most [`SIM_CAPACITY`] distinct addresses and
//! panics when that is exceeded; it is test support, not target code.

use heapless::LinearMap;

use crate::bus::RegisterBus;
use crate::register::Register;

/// Maximum number of distinct register addresses a [`SimBus`] can track
pub const SIM_CAPACITY: usize = 32;

/// Backing store of a simulated register bus
#[derive(Debug, Default)]
pub struct RegisterFile {
    values: LinearMap<u32, u32, SIM_CAPACITY>,
}

impl RegisterFile {
    /// Create an empty register file
    pub fn new() -> Self {
        Self {
            values: LinearMap::new(),
        }
    }

    /// Current value at `address` (zero if never written)
    pub fn get(&self, address: u32) -> u32 {
        self.values.get(&address).copied().unwrap_or(0)
    }

    /// Store a value at `address`
    pub fn set(&mut self, address: u32, value: u32) {
        if self.values.insert(address, value).is_err() {
            panic!("simulated register file full ({} entries)", SIM_CAPACITY);
        }
    }

    /// Set bits at `address` without going through the bus
    pub fn set_bits(&mut self, address: u32, mask: u32) {
        let value = self.get(address) | mask;
        self.set(address, value);
    }

    /// Clear bits at `address` without going through the bus
    pub fn clear_bits(&mut self, address: u32, mask: u32) {
        let value = self.get(address) & !mask;
        self.set(address, value);
    }
}

/// Behavioural model of the hardware behind a [`SimBus`]
///
/// Both hooks default to doing nothing, which makes the bus a plain memory.
pub trait SimHardware {
    /// Called before a bus read of `address` returns its value
    fn on_read(&mut self, _address: u32, _file: &mut RegisterFile) {}

    /// Called after `new` was stored at `address` (previous value `old`)
    fn on_write(&mut self, _address: u32, _old: u32, _new: u32, _file: &mut RegisterFile) {}
}

/// Hardware model with no behaviour
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHardware;

impl SimHardware for NoHardware {}

/// Simulated register bus
#[derive(Debug)]
pub struct SimBus<H = NoHardware> {
    file: RegisterFile,
    writes: LinearMap<u32, u32, SIM_CAPACITY>,
    hardware: H,
}

impl Default for SimBus<NoHardware> {
    fn default() -> Self {
        Self::new()
    }
}

impl SimBus<NoHardware> {
    /// Create a bus backed by plain memory
    pub fn new() -> Self {
        Self::with_hardware(NoHardware)
    }
}

impl<H: SimHardware> SimBus<H> {
    /// Create a bus with a hardware behaviour model
    pub fn with_hardware(hardware: H) -> Self {
        Self {
            file: RegisterFile::new(),
            writes: LinearMap::new(),
            hardware,
        }
    }

    /// Set a register's value without counting a write or running hooks
    ///
    /// Used to load reset values before a test.
    pub fn preset(&mut self, reg: Register, value: u32) {
        self.file.set(reg.address, value);
    }

    /// Inspect a register's value without running hooks
    pub fn peek(&self, reg: Register) -> u32 {
        self.file.get(reg.address)
    }

    /// Number of bus writes to a register so far
    pub fn write_count(&self, reg: Register) -> u32 {
        self.writes.get(&reg.address).copied().unwrap_or(0)
    }

    /// Access the hardware model
    pub fn hardware(&self) -> &H {
        &self.hardware
    }
}

impl<H: SimHardware> RegisterBus for SimBus<H> {
    fn read(&mut self, address: u32) -> u32 {
        self.hardware.on_read(address, &mut self.file);
        self.file.get(address)
    }

    fn write(&mut self, address: u32, value: u32) {
        let old = self.file.get(address);
        self.file.set(address, value);

        let count = self.writes.get(&address).copied().unwrap_or(0);
        if self.writes.insert(address, count + 1).is_err() {
            panic!("simulated write counter full ({} entries)", SIM_CAPACITY);
        }

        self.hardware.on_write(address, old, value, &mut self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::RegisterBusExt;
    use crate::register::Field;

    const CR: Register = Register::new("CR", 0x4000_0008);
    const SR: Register = Register::new("SR", 0x4000_0000);

    /// Sets SR bit 0 whenever CR bit 2 is written and counts SR reads
    #[derive(Default)]
    struct Loopback {
        reads: u32,
    }

    impl SimHardware for Loopback {
        fn on_read(&mut self, address: u32, _file: &mut RegisterFile) {
            if address == SR.address {
                self.reads += 1;
            }
        }

        fn on_write(&mut self, address: u32, _old: u32, new: u32, file: &mut RegisterFile) {
            if address == CR.address && new & (1 << 2) != 0 {
                file.set_bits(SR.address, 1);
            }
        }
    }

    #[test]
    fn test_plain_memory() {
        let mut bus = SimBus::new();
        assert_eq!(bus.read_reg(CR), 0);

        bus.write_reg(CR, 0x1234);
        assert_eq!(bus.read_reg(CR), 0x1234);
        assert_eq!(bus.write_count(CR), 1);
        assert_eq!(bus.write_count(SR), 0);
    }

    #[test]
    fn test_preset_is_not_counted() {
        let mut bus = SimBus::new();
        bus.preset(CR, 0xFFFF_0000);
        assert_eq!(bus.peek(CR), 0xFFFF_0000);
        assert_eq!(bus.write_count(CR), 0);

        bus.set_bits(CR, 1);
        assert_eq!(bus.peek(CR), 0xFFFF_0001);
        assert_eq!(bus.write_count(CR), 1);
    }

    #[test]
    fn test_hardware_hooks() {
        let mut bus = SimBus::with_hardware(Loopback::default());

        assert!(!bus.is_set(SR, Field::bit(0)));
        bus.set_bits(CR, 1 << 2);
        assert!(bus.is_set(SR, Field::bit(0)));
        assert_eq!(bus.hardware().reads, 2);

        // peek does not count as a bus read
        let _ = bus.peek(SR);
        assert_eq!(bus.hardware().reads, 2);
    }
}
