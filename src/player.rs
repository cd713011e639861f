//! Morse playback on two output lines.
//!
//! For every mark the flag line is held high for the whole mark while the tone line is toggled
//! once per half time-unit, so the beeper sees a square wave with a period of one time-unit.
//! Playback blocks on the delay provider and always runs to completion.

use crate::config::Timing;
use crate::error::{Error, Result};
use crate::morse::{self, Mark, Symbol};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Plays Morse messages on a tone line and a flag line
pub struct Player<TONE, FLAG, DELAY> {
    tone: TONE,
    flag: FLAG,
    delay: DELAY,
    timing: Timing,
}

impl<TONE, FLAG, DELAY> Player<TONE, FLAG, DELAY>
where
    TONE: OutputPin,
    FLAG: OutputPin,
    DELAY: DelayNs,
{
    /// Takes ownership of both lines and the delay provider. Both lines are driven low.
    pub fn new(mut tone: TONE, mut flag: FLAG, delay: DELAY, timing: Timing) -> Result<Self> {
        tone.set_low().map_err(Error::pin)?;
        flag.set_low().map_err(Error::pin)?;
        Ok(Player {
            tone,
            flag,
            delay,
            timing,
        })
    }

    /// Durations used by this player.
    #[inline]
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Plays every character of `message` in order.
    ///
    /// The message is checked before anything is output, so an unsupported character anywhere in
    /// the message results in an error and no signal at all.
    pub fn play(&mut self, message: &str) -> Result<()> {
        morse::validate(message)?;
        debug!("playing {=str}", message);
        for symbol in morse::encode_message(message) {
            self.play_symbol(symbol?)?;
        }
        Ok(())
    }

    /// Plays a single character followed by the letter gap.
    pub fn play_char(&mut self, c: char) -> Result<()> {
        self.play_symbol(morse::encode(c)?)
    }

    /// Plays the marks of `symbol` followed by the letter gap.
    pub fn play_symbol(&mut self, symbol: Symbol) -> Result<()> {
        trace!("symbol {=str}", symbol.as_str());
        for mark in symbol.marks() {
            self.play_mark(mark)?;
        }
        self.pause(self.timing.letter_gap);
        Ok(())
    }

    /// Plays one mark followed by the gap between marks.
    ///
    /// If the tone line fails mid-mark, the flag is still lowered before the error is returned.
    pub fn play_mark(&mut self, mark: Mark) -> Result<()> {
        self.flag.set_high().map_err(Error::pin)?;
        let beeped = self.beep(mark.units(&self.timing));
        let lowered = self.flag.set_low().map_err(Error::pin);
        beeped?;
        lowered?;
        self.pause(self.timing.mark_gap);
        Ok(())
    }

    /// Square wave on the tone line lasting `units` time-units
    fn beep(&mut self, units: u32) -> Result<()> {
        let high_us = self.timing.unit_us / 2;
        let low_us = self.timing.unit_us - high_us;
        for _ in 0..units {
            self.tone.set_high().map_err(Error::pin)?;
            self.delay.delay_us(high_us);
            self.tone.set_low().map_err(Error::pin)?;
            self.delay.delay_us(low_us);
        }
        Ok(())
    }

    /// Blocks for `units` time-units.
    #[inline]
    pub fn pause(&mut self, units: u32) {
        if units > 0 {
            self.delay.delay_us(self.timing.units_to_us(units));
        }
    }

    /// Gives back the lines and the delay provider.
    pub fn release(self) -> (TONE, FLAG, DELAY) {
        (self.tone, self.flag, self.delay)
    }
}
