//! STM32G0-specific HAL for the Sampler firmware
//!
//! This crate provides the fixed register map of the peripherals the
//! firmware touches, plus the volatile [`Mmio`] bus that implements
//! [`sampler_hal::RegisterBus`] on the target. Supported chips:
//!
//! - STM32G071RB (Nucleo-G071RB, LD4 on PA5)
//!
//! # Modules
//!
//! - [`rcc`] - Clock enables for GPIO ports and the ADC
//! - [`gpio`] - GPIOA mode/type/speed/pull and set/reset registers
//! - [`adc`] - ADC1 control, sampling time, channel selection and data
//! - [`systick`] - ARMv6-M SysTick timer and its exception priority
//!
//! Addresses and bit positions follow RM0444 and the ARMv6-M
//! architecture reference manual.

#![no_std]

pub mod adc;
pub mod gpio;
pub mod mmio;
pub mod rcc;
pub mod systick;

pub use mmio::Mmio;
