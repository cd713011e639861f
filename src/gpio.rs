//! Port 1 output lines.
//!
//! Only the two Morse lines are modelled. Each [`Output`] owns one bit of `P1OUT` and writes it with
//! a single `bis.b`/`bic.b`, so two outputs on the same port never race with each other.

use bitflags::bitflags;
use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
use msp430fr2355 as pac;

bitflags! {
    /// Port 1 bit assignments
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Port1Pins: u8 {
        /// P1.0, analog input A0, LDR divider
        const LIGHT = 1 << 0;
        /// P1.4, square wave to the beeper
        const TONE = 1 << 4;
        /// P1.6, flag raised for each mark
        const FLAG = 1 << 6;
    }
}

#[inline(always)]
fn p1() -> &'static pac::p1::RegisterBlock {
    // Register writes below are single read-modify-write instructions and there are no interrupts
    unsafe { &*pac::P1::ptr() }
}

/// Configure the output lines and the analog input. Outputs start low.
pub(crate) fn configure(p1: &pac::P1) {
    let outputs = (Port1Pins::TONE | Port1Pins::FLAG).bits();
    let analog = Port1Pins::LIGHT.bits();
    unsafe {
        p1.p1out.clear_bits(|w| w.bits(outputs));
        p1.p1dir.set_bits(|w| w.bits(outputs));
        p1.p1dir.clear_bits(|w| w.bits(analog));
        // SEL1:SEL0 = 11 selects the analog function
        p1.p1sel0.set_bits(|w| w.bits(analog));
        p1.p1sel1.set_bits(|w| w.bits(analog));
    }
}

/// One output bit of Port 1
pub struct Output {
    pin: Port1Pins,
}

impl Output {
    pub(crate) fn new(pin: Port1Pins) -> Self {
        Output { pin }
    }
}

impl ErrorType for Output {
    type Error = Infallible;
}

impl OutputPin for Output {
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        unsafe { p1().p1out.clear_bits(|w| w.bits(self.pin.bits())) };
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        unsafe { p1().p1out.set_bits(|w| w.bits(self.pin.bits())) };
        Ok(())
    }
}

impl StatefulOutputPin for Output {
    #[inline]
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(Port1Pins::from_bits_truncate(p1().p1out.read().bits()).contains(self.pin))
    }

    #[inline]
    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.is_set_high().map(|high| !high)
    }
}
