//! Light sensor abstraction.

/// Single-shot analog light reading.
///
/// Implementations start a conversion on the first call and return `WouldBlock` until the result
/// is ready, the same contract as the `embedded-hal` 0.2 `OneShot` ADC trait. With the LDR wired
/// as the low side of a divider, darker surroundings give lower readings.
pub trait LightSensor {
    /// Error type for failed conversions
    type Error: core::fmt::Debug;

    /// Starts or polls a conversion.
    fn read(&mut self) -> nb::Result<u16, Self::Error>;
}

impl<T: LightSensor + ?Sized> LightSensor for &mut T {
    type Error = T::Error;

    #[inline]
    fn read(&mut self) -> nb::Result<u16, Self::Error> {
        T::read(self)
    }
}
