//! Battery charge level formatting and parsing
//!
//! A [`ChargeLevel`] is the display form of a battery reading: at least two
//! digits, zero-padded, with a trailing percent sign, or the `"?"` sentinel
//! when no reading has ever been produced. Once constructed it is immutable;
//! a new reading always produces a new value.

use core::fmt::{self, Write};

use heapless::String;

/// Maximum formatted length ("100%")
pub const MAX_LEVEL_LEN: usize = 4;

/// Sentinel shown before any reading exists
const UNKNOWN: &str = "?";

/// Level reported when the sensor is unavailable
///
/// Wire-visible: both peers display this value verbatim.
const SENSOR_FALLBACK: &str = "50%";

/// A formatted battery charge level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeLevel(String<MAX_LEVEL_LEN>);

impl ChargeLevel {
    /// The `"?"` sentinel, used until a first reading arrives
    pub fn unknown() -> Self {
        let mut s = String::new();
        let _ = s.push_str(UNKNOWN);
        Self(s)
    }

    /// Format a raw sensor reading of `level` out of `scale`
    ///
    /// Rounds to the nearest percent and zero-pads to at least two digits.
    /// A reading with `level == -1` or `scale == -1` means the sensor was
    /// unavailable and yields the `"50%"` fallback. Readings outside
    /// `[0, scale]` are clamped.
    pub fn from_reading(level: i32, scale: i32) -> Self {
        if level < 0 || scale <= 0 {
            let mut s = String::new();
            let _ = s.push_str(SENSOR_FALLBACK);
            return Self(s);
        }

        let level = (level as u32).min(scale as u32);
        let scale = scale as u32;
        // Round half-up to the nearest percent
        let percent = (level * 100 + scale / 2) / scale;

        let mut s = String::new();
        // Cannot overflow: percent <= 100, so at most "100%" (4 bytes)
        let _ = write!(s, "{:02}%", percent);
        Self(s)
    }

    /// Parse a level received from the peer
    ///
    /// Accepts the `"?"` sentinel or 2-3 digit percentage text with a
    /// trailing `%` and a value of at most 100. Anything else is rejected,
    /// so a malformed push never reaches the display.
    pub fn parse(text: &str) -> Option<Self> {
        if text == UNKNOWN {
            return Some(Self::unknown());
        }

        let digits = text.strip_suffix('%')?;
        if !(2..=3).contains(&digits.len()) {
            return None;
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: u32 = digits.parse().ok()?;
        if value > 100 {
            return None;
        }

        // Keep the peer's exact rendering (fits: 3 digits + '%')
        let mut s = String::new();
        let _ = s.push_str(text);
        Some(Self(s))
    }

    /// The display string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether this is the `"?"` sentinel
    pub fn is_unknown(&self) -> bool {
        self.0.as_str() == UNKNOWN
    }
}

impl fmt::Display for ChargeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChargeLevel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.as_str());
    }
}
