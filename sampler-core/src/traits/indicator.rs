//! Status indicator trait

/// Output that shows the firmware is alive
///
/// Switching it on and off goes through `embedded_hal::digital::OutputPin`;
/// this trait only covers bringing the output up.
pub trait StatusIndicator {
    /// Configure the pin as an output
    fn configure(&mut self);
}
