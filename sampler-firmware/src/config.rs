//! Board configuration
//!
//! Constants come from board.toml, validated and generated by build.rs.

use sampler_core::config::TickConfig;
use sampler_core::WaitPolicy;
use sampler_drivers::AdcConfig;
use sampler_hal_stm32g0::adc::SampleTime;

mod generated {
    use super::{SampleTime, WaitPolicy};

    include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
}

/// Everything the firmware needs to know about the board
#[derive(Debug, Clone, Copy)]
pub struct BoardConfig {
    /// SysTick clock and rate
    pub tick: TickConfig,
    /// GPIOA pin of the indicator LED
    pub led_pin: u8,
    /// ADC input channel
    pub adc_channel: u8,
    /// Sampling time and wait policy
    pub adc: AdcConfig,
}

/// Board description compiled into the firmware
pub const BOARD: BoardConfig = BoardConfig {
    tick: TickConfig {
        core_clock_hz: generated::CORE_CLOCK_HZ,
        tick_hz: generated::TICK_HZ,
    },
    led_pin: generated::LED_PIN,
    adc_channel: generated::ADC_CHANNEL,
    adc: AdcConfig {
        sample_time: generated::SAMPLE_TIME,
        wait: generated::WAIT_POLICY,
    },
};
