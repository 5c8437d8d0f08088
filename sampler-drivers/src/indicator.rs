//! Status indicator output
//!
//! Drives a LED on a GPIOA pin (LD4 on PA5 for Nucleo-G071RB) through the
//! port's set/reset register. No software state is kept: the output data
//! register is the only record of whether the LED is on.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
use sampler_core::traits::StatusIndicator;
use sampler_hal::{RegisterBus, RegisterBusExt};
use sampler_hal_stm32g0::gpio::{self, Mode, OutputType, Pull, Speed, PINS_PER_PORT};
use sampler_hal_stm32g0::rcc::{self, iopenr};

/// Pin of the LD4 user LED
pub const LD4_PIN: u8 = 5;

/// Push-pull LED output on a GPIOA pin
pub struct Indicator<B> {
    bus: B,
    pin: u8,
}

impl<B: RegisterBus> Indicator<B> {
    /// Create an indicator on GPIOA `pin`
    ///
    /// Returns `None` if the port has no such pin.
    pub fn new(bus: B, pin: u8) -> Option<Self> {
        if pin >= PINS_PER_PORT {
            return None;
        }
        Some(Self { bus, pin })
    }

    /// Drive the pin high
    pub fn set_on(&mut self) {
        self.bus.write_reg(gpio::BSRR, gpio::bit_set(self.pin).mask());
    }

    /// Drive the pin low
    pub fn set_off(&mut self) {
        self.bus.write_reg(gpio::BSRR, gpio::bit_reset(self.pin).mask());
    }

    /// Check if the pin is being driven high
    pub fn is_on(&mut self) -> bool {
        self.bus.is_set(gpio::ODR, gpio::data(self.pin))
    }

    /// GPIOA pin number
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Access the underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }
}

impl<B: RegisterBus> StatusIndicator for Indicator<B> {
    /// Configure the pin as a low-speed push-pull output without pull resistor
    ///
    /// Every field is written with read-modify-write, so other pins on the
    /// port are untouched and calling this twice is harmless.
    fn configure(&mut self) {
        let pin = self.pin;

        self.bus.set_bits(rcc::IOPENR, iopenr::GPIOAEN.mask());

        self.bus.write_field(gpio::MODER, gpio::mode(pin), Mode::Output as u32);
        self.bus.write_field(gpio::OTYPER, gpio::output_type(pin), OutputType::PushPull as u32);
        // Lowest slew rate (OSPEEDy = 00)
        self.bus.write_field(gpio::OSPEEDR, gpio::speed(pin), Speed::VeryLow as u32);
        self.bus.write_field(gpio::PUPDR, gpio::pull(pin), Pull::None as u32);
    }
}

impl<B> ErrorType for Indicator<B> {
    type Error = Infallible;
}

impl<B: RegisterBus> OutputPin for Indicator<B> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_off();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_on();
        Ok(())
    }
}

impl<B: RegisterBus> StatefulOutputPin for Indicator<B> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.is_on())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_on())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{g0_bus, G0Model};
    use sampler_hal::sim::{SimBus, SimHardware};

    fn ld4() -> Indicator<SimBus<G0Model>> {
        Indicator::new(g0_bus(G0Model::new()), LD4_PIN).unwrap()
    }

    fn snapshot<H: SimHardware>(bus: &SimBus<H>) -> [u32; 5] {
        [
            bus.peek(rcc::IOPENR),
            bus.peek(gpio::MODER),
            bus.peek(gpio::OTYPER),
            bus.peek(gpio::OSPEEDR),
            bus.peek(gpio::PUPDR),
        ]
    }

    #[test]
    fn test_configure_ld4() {
        let mut led = ld4();
        led.configure();

        let bus = led.bus();
        assert_ne!(bus.peek(rcc::IOPENR) & iopenr::GPIOAEN.mask(), 0);
        assert_eq!(gpio::mode(5).extract(bus.peek(gpio::MODER)), Mode::Output as u32);
        assert_eq!(gpio::output_type(5).extract(bus.peek(gpio::OTYPER)), 0);
        assert_eq!(gpio::speed(5).extract(bus.peek(gpio::OSPEEDR)), 0);
        assert_eq!(gpio::pull(5).extract(bus.peek(gpio::PUPDR)), 0);
    }

    #[test]
    fn test_configure_leaves_other_pins() {
        let mut led = ld4();
        led.configure();

        let bus = led.bus();
        // Only MODE5 changed: 0b11 -> 0b01
        assert_eq!(bus.peek(gpio::MODER), gpio::reset::MODER & !(1 << 11));
        assert_eq!(bus.peek(gpio::OSPEEDR), gpio::reset::OSPEEDR);
        assert_eq!(bus.peek(gpio::PUPDR), gpio::reset::PUPDR);
    }

    #[test]
    fn test_configure_idempotent() {
        let mut once = ld4();
        once.configure();

        let mut twice = ld4();
        twice.configure();
        twice.configure();

        assert_eq!(snapshot(once.bus()), snapshot(twice.bus()));
    }

    #[test]
    fn test_on_off_use_bsrr() {
        let mut led = ld4();
        led.configure();

        led.set_on();
        assert_eq!(led.bus().peek(gpio::BSRR), 1 << 5);
        assert!(led.is_on());

        led.set_off();
        assert_eq!(led.bus().peek(gpio::BSRR), 1 << 21);
        assert!(!led.is_on());

        assert_eq!(led.bus().write_count(gpio::BSRR), 2);
    }

    #[test]
    fn test_embedded_hal_toggle() {
        let mut led = ld4();
        led.configure();

        led.set_low().unwrap();
        led.toggle().unwrap();
        assert!(led.is_set_high().unwrap());
        led.toggle().unwrap();
        assert!(led.is_set_low().unwrap());
    }

    #[test]
    fn test_invalid_pin() {
        assert!(Indicator::new(g0_bus(G0Model::new()), 16).is_none());

        let led = Indicator::new(g0_bus(G0Model::new()), 15).unwrap();
        assert_eq!(led.pin(), 15);
    }
}
