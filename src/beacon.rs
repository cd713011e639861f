//! The trigger loop: sample the light sensor, play the message when it is dark enough, rest.
//!
//! There is no debouncing or hysteresis. A reading that stays below the threshold replays the
//! message after every pause.

use crate::config::BeaconConfig;
use crate::error::{Error, Result};
use crate::morse;
use crate::player::Player;
use crate::sensor::LightSensor;
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Outcome of a single trigger check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Poll {
    /// The reading was below the threshold and the message was played
    Triggered(u16),
    /// The reading was at or above the threshold
    Idle(u16),
}

impl Poll {
    /// The sensor reading behind this outcome.
    #[inline]
    pub fn sample(self) -> u16 {
        match self {
            Poll::Triggered(sample) | Poll::Idle(sample) => sample,
        }
    }
}

/// Light-triggered Morse beacon
pub struct Beacon<'a, SENSOR, TONE, FLAG, DELAY> {
    sensor: SENSOR,
    player: Player<TONE, FLAG, DELAY>,
    message: &'a str,
    threshold: u16,
    trigger_pause: u32,
}

impl<'a, SENSOR, TONE, FLAG, DELAY> Beacon<'a, SENSOR, TONE, FLAG, DELAY>
where
    SENSOR: LightSensor,
    TONE: OutputPin,
    FLAG: OutputPin,
    DELAY: DelayNs,
{
    /// Builds a beacon, checking that the configured message is playable.
    pub fn new(
        config: BeaconConfig<'a>,
        sensor: SENSOR,
        tone: TONE,
        flag: FLAG,
        delay: DELAY,
    ) -> Result<Self> {
        if config.message.is_empty() {
            return Err(Error::EmptyMessage);
        }
        morse::validate(config.message)?;
        let player = Player::new(tone, flag, delay, config.timing)?;
        info!(
            "beacon armed, threshold {=u16}, message {=str}",
            config.threshold,
            config.message
        );
        Ok(Beacon {
            sensor,
            player,
            message: config.message,
            threshold: config.threshold,
            trigger_pause: config.trigger_pause,
        })
    }

    /// Takes one reading, plays the message if it is below the threshold, then pauses.
    pub fn poll(&mut self) -> Result<Poll> {
        let sample = nb::block!(self.sensor.read()).map_err(|_err| {
            warn!("light sensor read failed");
            Error::Sensor
        })?;
        let outcome = if sample < self.threshold {
            debug!("reading {=u16} below threshold", sample);
            self.player.play(self.message)?;
            Poll::Triggered(sample)
        } else {
            trace!("reading {=u16}", sample);
            Poll::Idle(sample)
        };
        self.player.pause(self.trigger_pause);
        Ok(outcome)
    }

    /// Polls forever. Only returns if a line or the sensor fails.
    pub fn run(&mut self) -> Result<Infallible> {
        loop {
            self.poll()?;
        }
    }

    /// The player driving the output lines.
    #[inline]
    pub fn player(&mut self) -> &mut Player<TONE, FLAG, DELAY> {
        &mut self.player
    }

    /// Gives back the sensor and the player.
    pub fn release(self) -> (SENSOR, Player<TONE, FLAG, DELAY>) {
        (self.sensor, self.player)
    }
}
