//! Behavioural model of the STM32G0 peripherals for driver tests
//!
//! Models just enough hardware for the drivers to make progress:
//! - ADCAL clears itself after a number of CR reads
//! - ADSTART completes a conversion after a number of ISR reads: EOC is
//!   set, ADSTART cleared and DR loaded
//! - Reading DR clears EOC, so does writing 1 to it in ISR
//! - Writing BSRR updates ODR
//!
//! A `None` poll count models a dead peripheral that never finishes.

use sampler_hal::sim::{RegisterFile, SimBus, SimHardware};
use sampler_hal_stm32g0::{adc, gpio};

pub struct G0Model {
    /// CR reads until calibration completes
    pub calibration_polls: Option<u32>,
    /// ISR reads until a conversion completes
    pub conversion_polls: Option<u32>,
    /// Value loaded into DR when a conversion completes
    pub next_result: u16,
    /// Rising edges of ADSTART written by the driver
    pub starts: u32,
    /// Conversions completed
    pub completed: u32,
    /// ISR reads since the last conversion start
    pub isr_reads: u32,
    calibrating: Pending,
    converting: Pending,
}

/// Progress of an operation started by the driver
#[derive(Clone, Copy, PartialEq, Eq)]
enum Pending {
    Idle,
    Remaining(u32),
    Never,
}

impl Pending {
    fn start(polls: Option<u32>) -> Self {
        match polls {
            Some(p) => Pending::Remaining(p.max(1)),
            None => Pending::Never,
        }
    }

    /// Count one poll; true when the operation completes on this poll
    fn poll(&mut self) -> bool {
        if let Pending::Remaining(remaining) = self {
            *remaining -= 1;
            if *remaining == 0 {
                *self = Pending::Idle;
                return true;
            }
        }
        false
    }
}

impl G0Model {
    pub fn new() -> Self {
        Self {
            calibration_polls: Some(3),
            conversion_polls: Some(5),
            next_result: 0,
            starts: 0,
            completed: 0,
            isr_reads: 0,
            calibrating: Pending::Idle,
            converting: Pending::Idle,
        }
    }

    /// Peripheral whose calibration never finishes
    pub fn stuck_calibration() -> Self {
        Self::new().with_calibration_polls(None)
    }

    /// Peripheral whose conversions never finish
    pub fn stuck_conversion() -> Self {
        Self::new().with_conversion_polls(None)
    }

    pub fn with_calibration_polls(mut self, polls: Option<u32>) -> Self {
        self.calibration_polls = polls;
        self
    }

    pub fn with_conversion_polls(mut self, polls: Option<u32>) -> Self {
        self.conversion_polls = polls;
        self
    }

    pub fn with_result(mut self, result: u16) -> Self {
        self.next_result = result;
        self
    }
}

impl SimHardware for G0Model {
    fn on_read(&mut self, address: u32, file: &mut RegisterFile) {
        if address == adc::CR.address {
            if self.calibrating.poll() {
                file.clear_bits(adc::CR.address, adc::cr::ADCAL.mask());
            }
        } else if address == adc::ISR.address {
            self.isr_reads += 1;
            if self.converting.poll() {
                self.completed += 1;
                file.set(adc::DR.address, self.next_result as u32);
                file.set_bits(adc::ISR.address, adc::isr::EOC.mask());
                file.clear_bits(adc::CR.address, adc::cr::ADSTART.mask());
            }
        } else if address == adc::DR.address {
            file.clear_bits(adc::ISR.address, adc::isr::EOC.mask());
        }
    }

    fn on_write(&mut self, address: u32, old: u32, new: u32, file: &mut RegisterFile) {
        if address == adc::CR.address {
            let rising = new & !old;
            if rising & adc::cr::ADCAL.mask() != 0 {
                self.calibrating = Pending::start(self.calibration_polls);
            }
            if rising & adc::cr::ADSTART.mask() != 0 {
                self.starts += 1;
                self.isr_reads = 0;
                self.converting = Pending::start(self.conversion_polls);
            }
            if rising & adc::cr::ADEN.mask() != 0 {
                file.set_bits(adc::ISR.address, adc::isr::ADRDY.mask());
            }
        } else if address == adc::ISR.address {
            // rc_w1: written ones clear flags, zeros leave them
            file.set(adc::ISR.address, old & !new);
        } else if address == gpio::BSRR.address {
            let set = new & 0xFFFF;
            let reset = new >> 16;
            let odr = (file.get(gpio::ODR.address) & !reset) | set;
            file.set(gpio::ODR.address, odr);
        }
    }
}

/// Simulated bus preloaded with the GPIOA reset values
pub fn g0_bus(model: G0Model) -> SimBus<G0Model> {
    let mut bus = SimBus::with_hardware(model);
    bus.preset(gpio::MODER, gpio::reset::MODER);
    bus.preset(gpio::OTYPER, gpio::reset::OTYPER);
    bus.preset(gpio::OSPEEDR, gpio::reset::OSPEEDR);
    bus.preset(gpio::PUPDR, gpio::reset::PUPDR);
    bus
}

#[cfg(test)]
mod tests {
    use super::*;
    use sampler_hal::RegisterBusExt;

    #[test]
    fn test_isr_write_one_to_clear() {
        let mut bus = g0_bus(G0Model::new());
        bus.preset(adc::ISR, adc::isr::ADRDY.mask() | adc::isr::EOC.mask());

        bus.write_reg(adc::ISR, adc::isr::EOC.mask());

        assert_eq!(bus.peek(adc::ISR), adc::isr::ADRDY.mask());
    }

    #[test]
    fn test_builders() {
        let model = G0Model::new()
            .with_calibration_polls(Some(7))
            .with_conversion_polls(None)
            .with_result(42);

        assert_eq!(model.calibration_polls, Some(7));
        assert_eq!(model.conversion_polls, None);
        assert_eq!(model.next_result, 42);
    }
}
