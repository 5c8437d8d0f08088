//! Device context
//!
//! Holds the state shared between the tick interrupt and the main loop.
//! The firmware keeps one instance in a `static` and hands references to
//! both sides.

use portable_atomic::{AtomicU16, AtomicU32, Ordering};

/// State shared by the tick interrupt handler and the main loop
///
/// - The tick counter is written only by [`on_tick`](Self::on_tick) (the
///   interrupt handler) and read by everyone else.
/// - The sample is written only by the main loop.
///
/// Both are single-word atomics, so reads never observe a torn value.
#[derive(Debug)]
pub struct DeviceContext {
    /// Timer interrupts since start, wrapping at `u32::MAX`
    tick: AtomicU32,
    /// Most recent raw conversion result
    sample: AtomicU16,
}

impl Default for DeviceContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceContext {
    /// Create a context with the tick counter at zero
    pub const fn new() -> Self {
        Self::with_tick(0)
    }

    /// Create a context with the tick counter at `start`
    pub const fn with_tick(start: u32) -> Self {
        Self {
            tick: AtomicU32::new(start),
            sample: AtomicU16::new(0),
        }
    }

    /// Record one timer interrupt
    ///
    /// Called from interrupt context; does nothing but the increment.
    #[inline]
    pub fn on_tick(&self) {
        self.tick.fetch_add(1, Ordering::Relaxed);
    }

    /// Current tick count
    #[inline]
    pub fn tick(&self) -> u32 {
        self.tick.load(Ordering::Relaxed)
    }

    /// Ticks elapsed since `start`, correct across one wrap of the counter
    pub fn ticks_since(&self, start: u32) -> u32 {
        self.tick().wrapping_sub(start)
    }

    /// Store the latest conversion result
    #[inline]
    pub fn store_sample(&self, sample: u16) {
        self.sample.store(sample, Ordering::Relaxed);
    }

    /// Latest conversion result (zero before the first conversion)
    #[inline]
    pub fn last_sample(&self) -> u16 {
        self.sample.load(Ordering::Relaxed)
    }
}
