//! International Morse code tables and character encoding.
//!
//! Only uppercase letters and digits are encodable. Everything else, including the character
//! right after `'Z'`, is rejected with [`Error::UnsupportedCharacter`].

use crate::config::Timing;
use crate::error::{Error, Result};
use core::str::Chars;

const BASE_LETTER: char = 'A';
const BASE_DIGIT: char = '0';

static LETTERS: [&str; 26] = [
    ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", // A-I
    ".---", "-.-", ".-..", "--", "-.", "---", ".--.", "--.-", ".-.", // J-R
    "...", "-", "..-", "...-", ".--", "-..-", "-.--", "--..", // S-Z
];

static DIGITS: [&str; 10] = [
    "-----", ".----", "..---", "...--", "....-", // 0-4
    ".....", "-....", "--...", "---..", "----.", // 5-9
];

/// A single element of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mark {
    /// Short mark, `.`
    Dot,
    /// Long mark, `-`
    Dash,
}

impl Mark {
    /// How long the mark keeps the flag raised, in time-units.
    #[inline]
    pub fn units(self, timing: &Timing) -> u32 {
        match self {
            Mark::Dot => timing.dot,
            Mark::Dash => timing.dash,
        }
    }
}

/// The Morse encoding of one character, backed by static table data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Symbol(&'static str);

impl Symbol {
    /// The symbol as a string of `.` and `-`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Iterates over the marks of this symbol, in playback order.
    #[inline]
    pub fn marks(&self) -> Marks {
        Marks(self.0.chars())
    }

    /// Number of time-units needed to play this symbol, including the gap after every mark and the
    /// letter gap.
    pub fn units(&self, timing: &Timing) -> u32 {
        self.marks()
            .map(|mark| mark.units(timing).saturating_add(timing.mark_gap))
            .fold(timing.letter_gap, u32::saturating_add)
    }
}

/// Iterator over the marks of a [`Symbol`]
#[derive(Debug, Clone)]
pub struct Marks(Chars<'static>);

impl Iterator for Marks {
    type Item = Mark;

    fn next(&mut self) -> Option<Mark> {
        // The tables only hold '.' and '-'
        self.0.next().map(|c| match c {
            '.' => Mark::Dot,
            _ => Mark::Dash,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

fn lookup(c: char) -> Option<&'static str> {
    match c {
        'A'..='Z' => LETTERS.get((c as u32 - BASE_LETTER as u32) as usize).copied(),
        '0'..='9' => DIGITS.get((c as u32 - BASE_DIGIT as u32) as usize).copied(),
        _ => None,
    }
}

/// Returns the Morse symbol for `c`.
///
/// Fails with [`Error::UnsupportedCharacter`] (position 0) when `c` is not an uppercase letter or a
/// digit.
pub fn encode(c: char) -> Result<Symbol> {
    lookup(c).map(Symbol).ok_or(Error::UnsupportedCharacter {
        character: c,
        position: 0,
    })
}

/// Checks that every character of `message` is encodable, reporting the first one that is not.
pub fn validate(message: &str) -> Result<()> {
    match encode_message(message).find_map(|symbol| symbol.err()) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Encodes `message` character by character. Unsupported characters yield an error carrying their
/// position, and iteration continues past them.
pub fn encode_message(message: &str) -> impl Iterator<Item = Result<Symbol>> + '_ {
    message.chars().enumerate().map(|(position, c)| {
        lookup(c).map(Symbol).ok_or(Error::UnsupportedCharacter {
            character: c,
            position,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_both_ranges() {
        assert_eq!(LETTERS.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert!(LETTERS
            .iter()
            .chain(DIGITS.iter())
            .all(|s| !s.is_empty() && s.chars().all(|c| c == '.' || c == '-')));
    }

    #[test]
    fn range_edges() {
        assert_eq!(encode('A').map(|s| s.as_str()), Ok(".-"));
        assert_eq!(encode('Z').map(|s| s.as_str()), Ok("--.."));
        assert_eq!(encode('0').map(|s| s.as_str()), Ok("-----"));
        assert_eq!(encode('9').map(|s| s.as_str()), Ok("----."));
    }

    #[test]
    fn one_past_z_is_rejected() {
        let past_z = char::from_u32('Z' as u32 + 1).unwrap();
        assert_eq!(past_z, '[');
        assert_eq!(
            encode(past_z),
            Err(Error::UnsupportedCharacter {
                character: '[',
                position: 0
            })
        );
    }

    #[test]
    fn marks_follow_symbol_text() {
        let marks: [Option<Mark>; 4] = {
            let mut it = encode('R').unwrap().marks();
            [it.next(), it.next(), it.next(), it.next()]
        };
        assert_eq!(marks, [Some(Mark::Dot), Some(Mark::Dash), Some(Mark::Dot), None]);
    }

    #[test]
    fn validate_reports_first_bad_character() {
        assert_eq!(
            validate("SOS 73"),
            Err(Error::UnsupportedCharacter {
                character: ' ',
                position: 3
            })
        );
        assert_eq!(validate("TRE"), Ok(()));
        assert_eq!(validate(""), Ok(()));
    }

    #[test]
    fn symbol_units_include_gaps() {
        let timing = Timing::default();
        // '-' then a mark gap, then the letter gap
        assert_eq!(encode('T').unwrap().units(&timing), 750 + 250 + 3750);
        // ".-." is dot, dash, dot, each followed by a mark gap
        assert_eq!(
            encode('R').unwrap().units(&timing),
            (250 + 250) + (750 + 250) + (250 + 250) + 3750
        );
    }

    #[test]
    fn symbol_units_saturate() {
        let timing = Timing {
            dash: u32::MAX,
            ..Timing::default()
        };
        assert_eq!(encode('M').unwrap().units(&timing), u32::MAX);
        assert_eq!(encode('E').unwrap().units(&timing), 250 + 250 + 3750);
    }
}
