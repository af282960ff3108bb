//! Typed sudoku digit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A sudoku digit, guaranteed to lie in `1..=9`.
///
/// Clues, search assignments, and candidate values all share this single
/// representation, so every peer comparison in the checker is a plain
/// `Option<Digit>` equality test — a given clue and a search-assigned value
/// that are numerically equal always compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

/// Error for a `u8` outside `1..=9`.
#[derive(Debug, thiserror::Error)]
#[error("digit out of range 1..=9: {0}")]
pub struct DigitOutOfRange(pub u8);

impl Digit {
    /// All nine digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, returning `None` outside `1..=9`.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The numeric value, in `1..=9`.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(DigitOutOfRange(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert!(Digit::new(0).is_none());
        assert!(Digit::new(10).is_none());
        assert!(Digit::try_from(0).is_err());
    }

    #[test]
    fn all_is_ascending_and_complete() {
        let values: Vec<u8> = Digit::ALL.iter().map(|d| d.get()).collect();
        assert_eq!(values, (1..=9).collect::<Vec<u8>>());
    }
}
