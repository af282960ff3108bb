//! The external puzzle contract: 81 cells in row-major order.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{Error, Result},
    solver::digit::Digit,
};

/// Cells on a 9×9 board.
pub const CELL_COUNT: usize = 81;

/// Cells per row, column, and box.
pub const GROUP_SIZE: usize = 9;

/// An 81-cell grid: the input handed to the solver and the output it hands
/// back. `None` marks an empty cell.
///
/// Parsed from an 81-character string — digits `1`–`9` for clues, `-`, `.`
/// or `0` for blanks — with all whitespace ignored, so both single-line and
/// nine-line puzzle files work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; CELL_COUNT],
}

impl Grid {
    pub fn new(cells: [Option<Digit>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a grid from nine rows of numeric values, `0` meaning empty.
    ///
    /// # Panics
    ///
    /// Panics if any value exceeds 9.
    pub(crate) fn from_rows(rows: [[u8; GROUP_SIZE]; GROUP_SIZE]) -> Self {
        let mut cells = [None; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                assert!(value <= 9, "cell value out of range: {value}");
                cells[r * GROUP_SIZE + c] = Digit::new(value);
            }
        }
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Digit> {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, value: Option<Digit>) {
        self.cells[index] = value;
    }

    /// Iterates all 81 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.cells.iter().copied()
    }

    /// `true` once every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [None; CELL_COUNT];
        let mut index = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            if index >= CELL_COUNT {
                return Err(Error::BadLength(index + 1));
            }
            cells[index] = match ch {
                '1'..='9' => Digit::new(ch as u8 - b'0'),
                '-' | '.' | '0' => None,
                _ => return Err(Error::BadCell(ch, index)),
            };
            index += 1;
        }
        if index != CELL_COUNT {
            return Err(Error::BadLength(index));
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(GROUP_SIZE) {
            for cell in row {
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serializes as the single-line 81-character form, `-` for blanks. Compact
/// in JSON and round-trips through [`FromStr`].
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut line = String::with_capacity(CELL_COUNT);
        for cell in &self.cells {
            match cell {
                Some(digit) => line.push(char::from(b'0' + digit.get())),
                None => line.push('-'),
            }
        }
        serializer.serialize_str(&line)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let line = String::deserialize(deserializer)?;
        line.parse().map_err(de::Error::custom)
    }
}
