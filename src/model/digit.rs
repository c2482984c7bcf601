//! Decimal digit newtype with a smart constructor.
//!
//! A `Digit` names one of the ten bones. Values outside 0..=9 are
//! unrepresentable, so nothing downstream has to re-check them.

use std::fmt;
use thiserror::Error;

/// A single decimal digit (0–9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

/// Rejected digit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Not a decimal digit: {0}")]
pub struct InvalidDigit(pub u8);

impl Digit {
    /// All ten digits in ascending order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Smart constructor: accepts 0..=9.
    pub fn new(value: u8) -> Result<Self, InvalidDigit> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InvalidDigit(value))
        }
    }

    /// Parse an ASCII decimal character.
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|v| Self(v as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Position in per-digit tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// English name, used for toolbar tooltips and the help overlay.
    pub fn name(self) -> &'static str {
        const NAMES: [&str; 10] = [
            "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
        ];
        NAMES[self.index()]
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
