//! Hardware driver implementations
//!
//! This crate provides register-level drivers for the peripherals the
//! firmware uses. Every driver is generic over a
//! [`RegisterBus`](sampler_hal::RegisterBus), so the same code drives the
//! real chip through `Mmio` and a simulated register file in tests:
//!
//! - ADC1 one-shot conversions ([`adc::Adc`])
//! - Status LED on a GPIOA pin ([`indicator::Indicator`])
//! - SysTick periodic interrupt ([`systick::SysTick`])

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod indicator;
pub mod systick;

#[cfg(test)]
mod testing;

pub use adc::{Adc, AdcConfig};
pub use indicator::Indicator;
pub use systick::SysTick;
