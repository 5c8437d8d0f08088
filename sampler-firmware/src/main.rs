//! Sampler - ADC polling firmware
//!
//! Main firmware binary for STM32G0-based Nucleo boards. Starts a 1 ms
//! SysTick, configures the LD4 indicator and ADC1, then converts ADC_IN0
//! forever, keeping the latest raw sample in the device context.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use {defmt_rtt as _, panic_probe as _};

use sampler_core::sampler::sample_once;
use sampler_core::startup::bring_up;
use sampler_core::traits::OneShotAdc;
use sampler_core::DeviceContext;
use sampler_drivers::{Adc, Indicator, SysTick};
use sampler_hal_stm32g0::Mmio;

use crate::config::BOARD;

mod config;
mod tick;

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Sampler firmware starting...");

    // SAFETY: the drivers only address registers from the STM32G0 register
    // map, and the three register sets are disjoint
    let (timer_bus, led_bus, adc_bus) = unsafe { (Mmio::steal(), Mmio::steal(), Mmio::steal()) };

    let mut timer = SysTick::new(timer_bus);
    let Some(mut led) = Indicator::new(led_bus, BOARD.led_pin) else {
        defmt::panic!("Indicator pin PA{} does not exist", BOARD.led_pin);
    };
    let mut adc = Adc::new(adc_bus, BOARD.adc);

    // Nothing can be measured without a running tick and a calibrated converter
    let period = match bring_up(&BOARD.tick, &mut timer, &mut led, &mut adc, BOARD.adc_channel) {
        Ok(period) => period,
        Err(e) => defmt::panic!("Startup failed: {:?}", e),
    };

    info!(
        "SysTick started: {} cycles per tick at {} Hz",
        period, BOARD.tick.tick_hz
    );
    info!("Indicator configured on PA{}", led.pin());

    let sample_x10 = BOARD.adc.sample_time.cycles_x10();
    info!(
        "ADC ready: channel {}, sample time {}.{} cycles, wait {:?}",
        BOARD.adc_channel,
        sample_x10 / 10,
        sample_x10 % 10,
        BOARD.adc.wait
    );
    if !adc.is_ready() {
        warn!("ADC enabled but ADRDY is not set yet");
    }
    if !BOARD.adc.wait.is_bounded() {
        warn!("Unbounded ADC waits: a stuck converter hangs the main loop");
    }

    run(&mut adc, &tick::DEVICE)
}

/// Convert and store forever
///
/// A failed conversion leaves the previous sample in place and the loop
/// carries on with the next one.
fn run<A: OneShotAdc>(adc: &mut A, device: &DeviceContext) -> ! {
    let mut last_stored = device.tick();
    loop {
        match sample_once(adc, device) {
            Ok(_) => last_stored = device.tick(),
            Err(e) => warn!(
                "Conversion failed: {:?}, last sample stored {} ticks ago",
                e,
                device.ticks_since(last_stored)
            ),
        }
    }
}
