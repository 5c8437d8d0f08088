//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the register-level drivers.

pub mod adc;
pub mod indicator;
pub mod timer;

pub use adc::{AdcError, AdcSetup, OneShotAdc};
pub use indicator::StatusIndicator;
pub use timer::{TickTimer, TimerError};
