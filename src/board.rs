//! MSP430FR2355 board bring-up: watchdog, pin unlock, Port 1 and ADC.
//!
//! **Note**: the device resets roughly 32 ms after boot unless the watchdog is held, so
//! [`Board::init`] should be the first thing the application calls.

use crate::adc::{AdcConfig, LightAdc};
use crate::config::{BeaconConfig, CLOCK_HZ};
use crate::delay::Delay;
use crate::error::Result;
use crate::gpio::{self, Output, Port1Pins};
use crate::Beacon;
use msp430fr2355 as pac;

const WDT_PASSWORD: u8 = 0x5A;

/// Everything the beacon runs on
pub struct Board {
    /// Square wave output, P1.4
    pub tone: Output,
    /// Mark indicator, P1.6
    pub flag: Output,
    /// LDR reader on A0
    pub light: LightAdc,
    /// Busy-wait delay calibrated for [`CLOCK_HZ`]
    pub delay: Delay,
}

impl Board {
    /// Holds the watchdog, releases the pins from their power-on lock and configures Port 1 and
    /// the ADC. MCLK is left at its power-on frequency.
    pub fn init(periph: pac::Peripherals) -> Board {
        periph
            .WDT_A
            .wdtctl
            .write(|w| unsafe { w.wdtpw().bits(WDT_PASSWORD) }.wdthold().hold());

        gpio::configure(&periph.P1);
        periph.PMM.pm5ctl0.write(|w| w.locklpm5().locklpm5_0());

        let light = AdcConfig::default().configure(periph.ADC);

        Board {
            tone: Output::new(Port1Pins::TONE),
            flag: Output::new(Port1Pins::FLAG),
            light,
            delay: Delay::new(CLOCK_HZ),
        }
    }

    /// Wires the board into a beacon.
    pub fn into_beacon<'a>(
        self,
        config: BeaconConfig<'a>,
    ) -> Result<Beacon<'a, LightAdc, Output, Output, Delay>> {
        Beacon::new(config, self.light, self.tone, self.flag, self.delay)
    }
}
