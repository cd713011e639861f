//! Light-triggered Morse code beeper built on [`embedded_hal`] traits.
//!
//! When the light sensor reading drops below a threshold, a short message is played as Morse code
//! on two output lines: a tone line carrying a square wave and a flag line that is high for the
//! duration of every mark.
//!
//! The encoder, player and trigger loop are hardware independent. Enabling the `msp430fr2355`
//! feature adds the board support used by the firmware in `firmware/`:
//!
//! | Signal | Pin  |
//! |--------|------|
//! | Tone   | P1.4 |
//! | Flag   | P1.6 |
//! | LDR    | P1.0 (A0) |
//!
//! # Usage
//!
//! ```ignore
//! let board = Board::init(msp430fr2355::Peripherals::take().unwrap());
//! let mut beacon = board.into_beacon(BeaconConfig::default())?;
//! beacon.run()?;
//! ```
//!
//! Building the board support requires `msp430-elf-gcc` installed and in $PATH.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

#[macro_use]
mod fmt;

pub mod beacon;
pub mod config;
pub mod delay;
pub mod error;
pub mod morse;
pub mod player;
pub mod sensor;

#[cfg(feature = "msp430fr2355")]
pub mod adc;
#[cfg(feature = "msp430fr2355")]
pub mod board;
#[cfg(feature = "msp430fr2355")]
pub mod gpio;

pub use beacon::{Beacon, Poll};
pub use config::{BeaconConfig, Timing};
pub use error::{Error, Result};
pub use morse::{encode, Mark, Symbol};
pub use player::Player;
pub use sensor::LightSensor;

#[cfg(feature = "msp430fr2355")]
pub use msp430fr2355 as pac;
