//! One-shot ADC trait

/// Errors that can occur while driving the ADC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Calibration flag never cleared within the wait policy
    CalibrationTimeout,
    /// End-of-conversion flag never set within the wait policy
    ConversionTimeout,
    /// Channel number does not exist on this converter
    InvalidChannel(u8),
}

/// Power-up and input selection of a converter
pub trait AdcSetup {
    /// Power up, calibrate and enable the converter
    fn configure(&mut self) -> Result<(), AdcError>;

    /// Prepare the analog input pin
    fn configure_input_pin(&mut self);

    /// Make `channel` the only active input
    fn select_channel(&mut self, channel: u8) -> Result<(), AdcError>;
}

/// Single-channel, software-triggered converter
///
/// Implementations are blocking: `convert` returns once the result is
/// available (or the wait policy gave up).
pub trait OneShotAdc {
    /// Start one conversion and wait for it to finish
    fn convert(&mut self) -> Result<(), AdcError>;

    /// Raw result of the last conversion
    ///
    /// Takes `&mut self` because reading the data register acknowledges
    /// the conversion on most converters.
    fn read_result(&mut self) -> u16;

    /// Convert and read in one call
    fn sample(&mut self) -> Result<u16, AdcError> {
        self.convert()?;
        Ok(self.read_result())
    }
}
