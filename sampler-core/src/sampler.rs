//! Sampling step
//!
//! One iteration of the main loop: convert, read, store.

use crate::context::DeviceContext;
use crate::traits::{AdcError, OneShotAdc};

/// Run one conversion and store the result in the device context
///
/// On error the stored sample keeps its previous value.
pub fn sample_once<A: OneShotAdc>(adc: &mut A, ctx: &DeviceContext) -> Result<u16, AdcError> {
    let sample = adc.sample()?;
    ctx.store_sample(sample);
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock ADC returning a scripted sequence of results
    struct MockAdc {
        values: &'static [u16],
        next: usize,
        current: u16,
        fail: bool,
        conversions: u32,
    }

    impl MockAdc {
        fn new(values: &'static [u16]) -> Self {
            Self {
                values,
                next: 0,
                current: 0,
                fail: false,
                conversions: 0,
            }
        }
    }

    impl OneShotAdc for MockAdc {
        fn convert(&mut self) -> Result<(), AdcError> {
            if self.fail {
                return Err(AdcError::ConversionTimeout);
            }
            self.conversions += 1;
            self.current = self.values[self.next % self.values.len()];
            self.next += 1;
            Ok(())
        }

        fn read_result(&mut self) -> u16 {
            self.current
        }
    }

    #[test]
    fn test_stores_sample() {
        let ctx = DeviceContext::new();
        let mut adc = MockAdc::new(&[0x0ABC]);

        assert_eq!(sample_once(&mut adc, &ctx), Ok(2748));
        assert_eq!(ctx.last_sample(), 2748);
    }

    #[test]
    fn test_overwrites_each_iteration() {
        let ctx = DeviceContext::new();
        let mut adc = MockAdc::new(&[100, 200, 300]);

        for expected in [100, 200, 300, 100] {
            assert_eq!(sample_once(&mut adc, &ctx), Ok(expected));
            assert_eq!(ctx.last_sample(), expected);
        }
        assert_eq!(adc.conversions, 4);
    }

    #[test]
    fn test_error_keeps_previous_sample() {
        let ctx = DeviceContext::new();
        let mut adc = MockAdc::new(&[1234]);

        sample_once(&mut adc, &ctx).unwrap();
        adc.fail = true;

        assert_eq!(sample_once(&mut adc, &ctx), Err(AdcError::ConversionTimeout));
        assert_eq!(ctx.last_sample(), 1234);
    }
}
