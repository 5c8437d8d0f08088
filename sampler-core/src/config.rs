//! Tick configuration
//!
//! The tick period is derived from the core clock and the desired tick
//! rate. With the default 12 MHz clock and 1 kHz tick rate the timer
//! reloads every 12 000 cycles (1 ms).

/// Errors in timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick rate of zero
    ZeroTickRate,
    /// Tick rate higher than the core clock (period below one cycle)
    TickRateAboveClock,
}

/// Default core clock frequency
pub const DEFAULT_CORE_CLOCK_HZ: u32 = 12_000_000;

/// Default tick rate (one tick per millisecond)
pub const DEFAULT_TICK_HZ: u32 = 1_000;

/// Tick timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickConfig {
    /// Frequency of the clock driving the tick timer
    pub core_clock_hz: u32,
    /// Timer interrupts per second
    pub tick_hz: u32,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            core_clock_hz: DEFAULT_CORE_CLOCK_HZ,
            tick_hz: DEFAULT_TICK_HZ,
        }
    }
}

impl TickConfig {
    /// Clock cycles between two tick interrupts
    ///
    /// Integer division: a clock that is not a multiple of the tick rate
    /// gives a slightly short period.
    pub fn period_cycles(&self) -> Result<u32, ConfigError> {
        if self.tick_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.tick_hz > self.core_clock_hz {
            return Err(ConfigError::TickRateAboveClock);
        }
        Ok(self.core_clock_hz / self.tick_hz)
    }
}
