//! System tick
//!
//! Owns the device context and the SysTick exception handler that
//! advances it once per tick period.

use cortex_m_rt::exception;
use sampler_core::DeviceContext;

/// State shared by the SysTick handler and the main loop
pub static DEVICE: DeviceContext = DeviceContext::new();

#[exception]
fn SysTick() {
    DEVICE.on_tick();
}

// Log timestamps in ticks since boot
defmt::timestamp!("{=u32}", DEVICE.tick());
