//! Power-on sequence
//!
//! Brings the board up in a fixed order before the sampling loop starts:
//!
//! ```text
//! tick timer -> indicator -> ADC calibrate/enable -> ADC input pin -> ADC channel
//! ```
//!
//! The first failing step ends the sequence; later steps are not run.

use crate::config::{ConfigError, TickConfig};
use crate::traits::{AdcError, AdcSetup, StatusIndicator, TickTimer, TimerError};

/// A power-on step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    /// Tick rate cannot be derived from the core clock
    Tick(ConfigError),
    /// Tick timer rejected the period
    Timer(TimerError),
    /// ADC calibration or channel selection failed
    Adc(AdcError),
}

impl From<ConfigError> for StartupError {
    fn from(e: ConfigError) -> Self {
        StartupError::Tick(e)
    }
}

impl From<TimerError> for StartupError {
    fn from(e: TimerError) -> Self {
        StartupError::Timer(e)
    }
}

impl From<AdcError> for StartupError {
    fn from(e: AdcError) -> Self {
        StartupError::Adc(e)
    }
}

/// Run the power-on sequence
///
/// Returns the tick period in clock cycles.
pub fn bring_up<T, L, A>(
    tick: &TickConfig,
    timer: &mut T,
    indicator: &mut L,
    adc: &mut A,
    channel: u8,
) -> Result<u32, StartupError>
where
    T: TickTimer,
    L: StatusIndicator,
    A: AdcSetup,
{
    let period = tick.period_cycles()?;
    timer.start(period)?;

    indicator.configure();

    adc.configure()?;
    adc.configure_input_pin();
    adc.select_channel(channel)?;

    Ok(period)
}
