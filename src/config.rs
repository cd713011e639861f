//! Compile-time constants and the runtime configuration structs built from them.
//!
//! Every duration is counted in time-units. One time-unit lasts [`TIME_UNIT_US`] microseconds
//! (1 ms), which is also the period of the simulated tone.

/// Length of a dot, in time-units
pub const DOT: u32 = 250;
/// Length of a dash, in time-units
pub const DASH: u32 = 750;
/// Silence after every character, in time-units. The last one doubles as the end-of-message pause.
pub const LETTER_GAP: u32 = 5 * DASH;
/// Pause after each trigger check, in time-units
pub const TRIGGER_PAUSE: u32 = 10 * DASH;
/// ADC readings strictly below this value trigger playback. The LDR divider reads low in the dark.
pub const THRESHOLD: u16 = 90;
/// The message played on every trigger
pub const MESSAGE: &str = "TRE";
/// Microseconds per time-unit
pub const TIME_UNIT_US: u32 = 1_000;
/// MCLK frequency the busy-wait delay is calibrated against. Power-on default of the FR2355 DCO.
pub const CLOCK_HZ: u32 = 1_000_000;

/// Durations used by the player, in time-units.
///
/// The default configuration matches the constants above:
/// - 250 unit dots and 750 unit dashes
/// - one dot of silence between marks
/// - five dashes of silence after each character
/// - 1 ms time-unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Microseconds per time-unit. The tone toggles every half unit.
    pub unit_us: u32,
    /// Length of a dot
    pub dot: u32,
    /// Length of a dash
    pub dash: u32,
    /// Silence between two marks of the same character
    pub mark_gap: u32,
    /// Silence after each character
    pub letter_gap: u32,
}

impl Timing {
    /// Creates a timing configuration. A default implementation is also available through `::default()`
    pub const fn new(unit_us: u32, dot: u32, dash: u32, mark_gap: u32, letter_gap: u32) -> Self {
        Timing {
            unit_us,
            dot,
            dash,
            mark_gap,
            letter_gap,
        }
    }

    /// Converts a number of time-units into microseconds, saturating on overflow.
    #[inline]
    pub const fn units_to_us(&self, units: u32) -> u32 {
        units.saturating_mul(self.unit_us)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::new(TIME_UNIT_US, DOT, DASH, DOT, LETTER_GAP)
    }
}

/// Everything the trigger loop needs besides its hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeaconConfig<'a> {
    /// Text to play. Uppercase letters and digits only.
    pub message: &'a str,
    /// Readings strictly below this value trigger playback.
    pub threshold: u16,
    /// Pause after each check, in time-units
    pub trigger_pause: u32,
    /// Durations used during playback
    pub timing: Timing,
}

impl<'a> BeaconConfig<'a> {
    /// Creates a beacon configuration with the default timing and pause.
    pub const fn new(message: &'a str, threshold: u16) -> Self {
        BeaconConfig {
            message,
            threshold,
            trigger_pause: TRIGGER_PAUSE,
            timing: Timing::new(TIME_UNIT_US, DOT, DASH, DOT, LETTER_GAP),
        }
    }
}

impl Default for BeaconConfig<'static> {
    fn default() -> Self {
        BeaconConfig::new(MESSAGE, THRESHOLD)
    }
}
