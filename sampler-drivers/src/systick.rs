//! SysTick periodic interrupt
//!
//! Programs the core timer the same way CMSIS `SysTick_Config` does:
//! reload value, lowest exception priority, counter cleared, then the
//! counter started on the processor clock with its interrupt enabled.

use sampler_core::traits::{TickTimer, TimerError};
use sampler_hal::{RegisterBus, RegisterBusExt};
use sampler_hal_stm32g0::systick::{
    self, ctrl, encode_priority, load, shpr3, LOWEST_PRIORITY, MAX_RELOAD,
};

/// SysTick driver
pub struct SysTick<B> {
    bus: B,
}

impl<B: RegisterBus> SysTick<B> {
    /// Create a driver; the timer is not touched until started
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Access the underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }
}

impl<B: RegisterBus> TickTimer for SysTick<B> {
    fn start(&mut self, period_cycles: u32) -> Result<(), TimerError> {
        // Zero wraps to u32::MAX and is rejected too
        let reload = period_cycles.wrapping_sub(1);
        if reload > MAX_RELOAD {
            return Err(TimerError::PeriodOutOfRange(period_cycles));
        }

        self.bus.write_reg(systick::LOAD, load::RELOAD.encode(reload));
        self.bus.write_field(systick::SHPR3, shpr3::PRI_15, encode_priority(LOWEST_PRIORITY));
        self.bus.write_reg(systick::VAL, 0);
        self.bus.write_reg(
            systick::CTRL,
            ctrl::CLKSOURCE.mask() | ctrl::TICKINT.mask() | ctrl::ENABLE.mask(),
        );
        Ok(())
    }
}
