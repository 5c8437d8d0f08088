//! ADC1 one-shot driver
//!
//! Drives the converter through its implicit register states:
//!
//! ```text
//! Uninitialized -> Configuring -> Calibrating -> Ready -> Converting -> Ready -> ...
//! ```
//!
//! Clock prescaler, data alignment (right), resolution (12 bit), single
//! conversion mode and software trigger are all left at their reset values.

use sampler_core::traits::{AdcError, AdcSetup, OneShotAdc};
use sampler_core::WaitPolicy;
use sampler_hal::{RegisterBus, RegisterBusExt};
use sampler_hal_stm32g0::adc::{self, cr, dr, isr, smpr, SampleTime};
use sampler_hal_stm32g0::rcc::{self, apbenr2, iopenr};

/// ADC driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcConfig {
    /// Sampling time applied to every channel (SMP1)
    pub sample_time: SampleTime,
    /// Wait policy for calibration and end of conversion
    pub wait: WaitPolicy,
}

/// ADC1 driver
pub struct Adc<B> {
    bus: B,
    config: AdcConfig,
}

impl<B: RegisterBus> Adc<B> {
    /// Create a driver; no register is touched until [`AdcSetup::configure`]
    pub fn new(bus: B, config: AdcConfig) -> Self {
        Self { bus, config }
    }

    /// Check if the converter reports ready (ADRDY)
    pub fn is_ready(&mut self) -> bool {
        self.bus.is_set(adc::ISR, isr::ADRDY)
    }

    /// Access the underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }
}

impl<B: RegisterBus> AdcSetup for Adc<B> {
    /// Power up, calibrate and enable the converter
    ///
    /// 1. Enable the ADC clock
    /// 2. Enable the internal voltage regulator (required before any conversion)
    /// 3. Program the sampling time
    /// 4. Run self-calibration and wait for ADCAL to clear
    /// 5. Enable the ADC
    fn configure(&mut self) -> Result<(), AdcError> {
        self.bus.set_bits(rcc::APBENR2, apbenr2::ADCEN.mask());

        self.bus.set_bits(adc::CR, cr::ADVREGEN.mask());

        self.bus.write_field(adc::SMPR, smpr::SMP1, self.config.sample_time.bits());

        self.bus.set_bits(adc::CR, cr::ADCAL.mask());
        let bus = &mut self.bus;
        self.config
            .wait
            .wait_until(|| !bus.is_set(adc::CR, cr::ADCAL))
            .map_err(|_| AdcError::CalibrationTimeout)?;

        self.bus.set_bits(adc::CR, cr::ADEN.mask());
        Ok(())
    }

    /// Prepare the analog input pin of a GPIOA channel (ADC_IN0..ADC_IN7)
    ///
    /// Only the port clock is enabled. Port A pins come out of reset in
    /// analog mode, so MODER is left untouched.
    fn configure_input_pin(&mut self) {
        self.bus.set_bits(rcc::IOPENR, iopenr::GPIOAEN.mask());
    }

    /// Make `channel` the only active input
    ///
    /// CHSELR is written as a whole so exactly one CHSEL bit is set. The
    /// sequencer mode (CFGR1.CHSELRMOD) stays at its reset value.
    fn select_channel(&mut self, channel: u8) -> Result<(), AdcError> {
        let field = adc::channel_select(channel).ok_or(AdcError::InvalidChannel(channel))?;
        self.bus.write_reg(adc::CHSELR, field.mask());
        Ok(())
    }
}

impl<B: RegisterBus> OneShotAdc for Adc<B> {
    /// Start a conversion and wait for its EOC
    ///
    /// An EOC left over from an earlier conversion (e.g. one abandoned on
    /// timeout) is cleared first, so only this conversion can end the wait.
    fn convert(&mut self) -> Result<(), AdcError> {
        // ISR flags are write-one-to-clear
        self.bus.write_reg(adc::ISR, isr::EOC.mask());
        self.bus.set_bits(adc::CR, cr::ADSTART.mask());

        let bus = &mut self.bus;
        self.config
            .wait
            .wait_until(|| bus.is_set(adc::ISR, isr::EOC))
            .map_err(|_| AdcError::ConversionTimeout)?;
        Ok(())
    }

    fn read_result(&mut self) -> u16 {
        self.bus.read_field(adc::DR, dr::DATA) as u16
    }
}
