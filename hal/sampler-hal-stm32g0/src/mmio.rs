//! Volatile memory-mapped register bus
//!
//! The only place in the workspace where registers are dereferenced.

use sampler_hal::RegisterBus;

/// Register bus backed by the real memory map
///
/// Zero-sized; every access is a single 32-bit volatile load or store.
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create the MMIO bus
    ///
    /// # Safety
    ///
    /// The caller must run on an STM32G0 and must only pass addresses of
    /// registers from this crate's register map to the bus. Creating more
    /// than one `Mmio` is allowed only if their register sets do not race
    /// (the SysTick handler and the main loop touch disjoint registers).
    pub const unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl RegisterBus for Mmio {
    #[inline(always)]
    fn read(&mut self, address: u32) -> u32 {
        // SAFETY: `steal` requires every address to be an aligned, mapped
        // peripheral register
        unsafe { core::ptr::read_volatile(address as usize as *const u32) }
    }

    #[inline(always)]
    fn write(&mut self, address: u32, value: u32) {
        // SAFETY: see `read`
        unsafe { core::ptr::write_volatile(address as usize as *mut u32, value) }
    }
}
