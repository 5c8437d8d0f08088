//! Board-agnostic core logic for the ADC polling firmware
//!
//! This crate contains everything that does not depend on a register map:
//!
//! - Hardware abstraction traits (one-shot ADC, tick timer)
//! - Device context holding the tick counter and the last sample
//! - Explicit wait policy for busy-waits on hardware flags
//! - Tick configuration and period math
//! - The power-on sequence and the sampling step run by the main loop

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod context;
pub mod sampler;
pub mod startup;
pub mod traits;
pub mod wait;

pub use context::DeviceContext;
pub use wait::{Timeout, WaitPolicy};
