//! Periodic tick timer trait

/// Errors from configuring the tick timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Requested period (in clock cycles) cannot be loaded into the counter
    PeriodOutOfRange(u32),
}

/// Timer that raises an interrupt every fixed number of clock cycles
pub trait TickTimer {
    /// Start raising an interrupt every `period_cycles` clock cycles
    fn start(&mut self, period_cycles: u32) -> Result<(), TimerError>;
}
