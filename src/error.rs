//! Crate-wide error type.

use derive_more::{Display, Error};
use embedded_hal::digital::ErrorKind;

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported while encoding or playing a message.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The character has no entry in the Morse tables. Only `A`-`Z` and `0`-`9` are encodable.
    #[display("unsupported character {character:?} at position {position}")]
    UnsupportedCharacter {
        /// The offending character
        character: char,
        /// Its index (in characters) within the message
        position: usize,
    },

    /// A beacon was configured with a message that has nothing to play.
    #[display("message is empty")]
    EmptyMessage,

    /// One of the output lines reported a failure.
    #[display("output pin error: {_0:?}")]
    Pin(#[error(not(source))] ErrorKind),

    /// The light sensor reported a failure.
    #[display("light sensor error")]
    Sensor,
}

impl Error {
    /// Build a [`Error::Pin`] from any `embedded-hal` digital error.
    pub(crate) fn pin<E: embedded_hal::digital::Error>(err: E) -> Self {
        Error::Pin(err.kind())
    }
}
