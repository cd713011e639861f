//! Busy-wait delay calibrated against the MCLK frequency.
//!
//! Nothing else runs while waiting: there are no interrupts and no low power modes involved.
//! Waits are split into whole milliseconds and a remainder so the spin counter fits in a
//! 16-bit register.

#[cfg(feature = "msp430fr2355")]
use embedded_hal::delay::DelayNs;

/// MCLK cycles per iteration of the spin loop: `nop` (1) + `dec.w` (1) + `jnz` (2)
pub const CYCLES_PER_SPIN: u32 = 4;

/// Spin-loop iterations needed for a given MCLK frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    spins_per_ms: u16,
}

impl Calibration {
    /// Calibration for an MCLK running at `freq` Hz. Saturates above ~262 MHz.
    pub const fn new(freq: u32) -> Self {
        let spins = freq / 1_000 / CYCLES_PER_SPIN;
        Calibration {
            spins_per_ms: if spins > u16::MAX as u32 {
                u16::MAX
            } else {
                spins as u16
            },
        }
    }

    /// Spin iterations in one millisecond.
    #[inline]
    pub const fn spins_per_ms(&self) -> u16 {
        self.spins_per_ms
    }

    /// Splits `us` microseconds into whole milliseconds and the spins for the remainder.
    #[inline]
    pub const fn split_us(&self, us: u32) -> (u32, u16) {
        // remainder < 1000, so the product stays below 1000 * u16::MAX
        let rest = (us % 1_000) * self.spins_per_ms as u32 / 1_000;
        (us / 1_000, rest as u16)
    }
}

/// Delay provider struct
#[cfg(feature = "msp430fr2355")]
pub struct Delay {
    calibration: Calibration,
}

#[cfg(feature = "msp430fr2355")]
impl Delay {
    /// Delay calibrated for an MCLK running at `freq` Hz.
    pub fn new(freq: u32) -> Self {
        Delay {
            calibration: Calibration::new(freq),
        }
    }

    #[inline(always)]
    fn spin(mut n: u16) {
        while n != 0 {
            msp430::asm::nop();
            n -= 1;
        }
    }

    fn wait_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            Self::spin(self.calibration.spins_per_ms());
        }
    }
}

#[cfg(feature = "msp430fr2355")]
impl DelayNs for Delay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        let (ms, rest) = self.calibration.split_us(us);
        self.wait_ms(ms);
        Self::spin(rest);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait_ms(ms);
    }
}
