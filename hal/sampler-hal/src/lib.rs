//! Sampler Hardware Abstraction Layer
//!
//! This crate defines the register access layer that the drivers are
//! written against. Peripherals are described as typed [`Register`] and
//! [`Field`] values and every access goes through a [`RegisterBus`], so the
//! same driver code runs on the target (volatile MMIO) and on the host
//! (simulated register file).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  sampler-drivers (ADC, LED, SysTick)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sampler-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ sampler-hal-  │       │    SimBus     │
//! │ stm32g0 Mmio  │       │ (host tests)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Features
//!
//! - `sim` - Enable [`sim::SimBus`], a fixed-capacity register file with
//!   pluggable hardware behaviour for tests
//! - `defmt` - Enable debug formatting support

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod register;
#[cfg(feature = "sim")]
pub mod sim;

// Re-export key types at crate root for convenience
pub use bus::{RegisterBus, RegisterBusExt};
pub use register::{Field, Register};
