//! Single-channel ADC reader for the light-dependent resistor on P1.0 (channel A0).

use crate::sensor::LightSensor;
use core::convert::Infallible;
use msp430fr2355 as pac;

const LIGHT_CHANNEL: u8 = 0;

/// How many ADCCLK cycles the sample-and-hold stage lasts for.
///
/// Default: 64 cycles, plenty for the high source impedance of an LDR divider
#[derive(Default, Copy, Clone, PartialEq, Eq)]
pub enum SampleTime {
    /// Sample for 4 ADCCLK cycles
    _4 = 0b0000,
    /// Sample for 16 ADCCLK cycles
    _16 = 0b0010,
    /// Sample for 64 ADCCLK cycles
    #[default]
    _64 = 0b0100,
    /// Sample for 256 ADCCLK cycles
    _256 = 0b1000,
}

/// The output resolution of the conversion.
///
/// Default: 10-bit, readings 0..=1023
#[derive(Default, Copy, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 8-bit conversion result
    _8BIT = 0b00,
    /// 10-bit conversion result
    #[default]
    _10BIT = 0b01,
    /// 12-bit conversion result
    _12BIT = 0b10,
}

/// Configuration object for the light ADC. MODCLK is always the conversion clock.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct AdcConfig {
    /// Bits per conversion result. The threshold must be scaled to match.
    pub resolution: Resolution,
    /// Sample-and-hold time
    pub sample_time: SampleTime,
}

impl AdcConfig {
    /// Creates an ADC configuration. A default implementation is also available through `::default()`
    pub fn new(resolution: Resolution, sample_time: SampleTime) -> AdcConfig {
        AdcConfig {
            resolution,
            sample_time,
        }
    }

    /// Applies this configuration to the hardware registers and returns an enabled reader on A0.
    pub fn configure(self, adc_reg: pac::ADC) -> LightAdc {
        disable_adc_reg(&adc_reg);

        let adcsht = self.sample_time as u8;
        adc_reg.adcctl0.write(|w| w.adcsht().bits(adcsht));
        adc_reg.adcctl1.write(|w| w.adcshp().adcshp_1());
        let adcres = self.resolution as u8;
        adc_reg.adcctl2.write(|w| w.adcres().bits(adcres));
        adc_reg
            .adcmctl0
            .modify(|_, w| w.adcinch().bits(LIGHT_CHANNEL));

        unsafe { adc_reg.adcctl0.set_bits(|w| w.adcon().set_bit()) };

        LightAdc {
            adc_reg,
            is_waiting: false,
        }
    }
}

/// ADC dedicated to the light sensor
pub struct LightAdc {
    adc_reg: pac::ADC,
    is_waiting: bool,
}

impl LightAdc {
    /// Whether the ADC is currently sampling or converting.
    pub fn is_busy(&self) -> bool {
        self.adc_reg.adcctl1.read().adcbusy().bit_is_set()
    }

    fn start_conversion(&mut self) {
        unsafe {
            self.adc_reg
                .adcctl0
                .set_bits(|w| w.adcenc().set_bit().adcsc().set_bit());
        }
    }
}

fn disable_adc_reg(adc: &pac::ADC) {
    unsafe {
        adc.adcctl0
            .clear_bits(|w| w.adcon().clear_bit().adcenc().clear_bit());
    }
}

impl LightSensor for LightAdc {
    type Error = Infallible; // Only returns WouldBlock

    fn read(&mut self) -> nb::Result<u16, Self::Error> {
        if self.is_waiting {
            if self.is_busy() {
                return Err(nb::Error::WouldBlock);
            }
            self.is_waiting = false;
            return Ok(self.adc_reg.adcmem0.read().bits());
        }

        self.start_conversion();
        self.is_waiting = true;
        Err(nb::Error::WouldBlock)
    }
}
