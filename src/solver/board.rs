//! The board/domain model: per-cell value, fixedness, and candidate domain.

use crate::solver::{
    candidates::CandidateSet,
    digit::Digit,
    grid::{Grid, CELL_COUNT, GROUP_SIZE},
};

const BOX_SIDE: usize = 3;

pub(crate) fn row_of(index: usize) -> usize {
    index / GROUP_SIZE
}

pub(crate) fn col_of(index: usize) -> usize {
    index % GROUP_SIZE
}

/// Indices of the cells sharing `index`'s row, including `index` itself.
pub(crate) fn row_cells(index: usize) -> impl Iterator<Item = usize> {
    let start = row_of(index) * GROUP_SIZE;
    start..start + GROUP_SIZE
}

/// Indices of the cells sharing `index`'s column, including `index` itself.
pub(crate) fn col_cells(index: usize) -> impl Iterator<Item = usize> {
    let start = col_of(index);
    (0..GROUP_SIZE).map(move |r| start + r * GROUP_SIZE)
}

/// Indices of the cells sharing `index`'s 3×3 box, including `index` itself.
pub(crate) fn box_cells(index: usize) -> impl Iterator<Item = usize> {
    let origin =
        (row_of(index) / BOX_SIDE) * BOX_SIDE * GROUP_SIZE + (col_of(index) / BOX_SIDE) * BOX_SIDE;
    (0..GROUP_SIZE).map(move |i| origin + (i / BOX_SIDE) * GROUP_SIZE + i % BOX_SIDE)
}

/// One board position: its current value, whether it was a given clue, and
/// its remaining candidate domain.
///
/// A given cell's value never changes and its candidate set stays empty for
/// the puzzle's lifetime. An open cell holds `None` until the search assigns
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    value: Option<Digit>,
    given: bool,
    candidates: CandidateSet,
}

/// The 81-cell working state of the search, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn from_grid(grid: &Grid) -> Self {
        let mut cells = [Cell {
            value: None,
            given: false,
            candidates: CandidateSet::FULL,
        }; CELL_COUNT];
        for (cell, value) in cells.iter_mut().zip(grid.cells()) {
            if let Some(digit) = value {
                *cell = Cell {
                    value: Some(digit),
                    given: true,
                    candidates: CandidateSet::EMPTY,
                };
            }
        }
        Self { cells }
    }

    pub fn value(&self, index: usize) -> Option<Digit> {
        self.cells[index].value
    }

    pub fn is_given(&self, index: usize) -> bool {
        self.cells[index].given
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.cells[index].value.is_none()
    }

    pub fn candidates(&self, index: usize) -> CandidateSet {
        self.cells[index].candidates
    }

    pub(crate) fn set_value(&mut self, index: usize, digit: Digit) {
        debug_assert!(!self.cells[index].given, "assigning over a given clue");
        self.cells[index].value = Some(digit);
    }

    pub(crate) fn clear_value(&mut self, index: usize) {
        debug_assert!(!self.cells[index].given, "unassigning a given clue");
        self.cells[index].value = None;
    }

    /// Removes a candidate, reporting whether it was present.
    pub(crate) fn remove_candidate(&mut self, index: usize, digit: Digit) -> bool {
        self.cells[index].candidates.remove(digit)
    }

    /// Restores a candidate removed earlier; the digit must be absent.
    pub(crate) fn restore_candidate(&mut self, index: usize, digit: Digit) {
        self.cells[index].candidates.insert(digit);
    }

    /// Snapshots the current values into a [`Grid`].
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::new([None; CELL_COUNT]);
        for (index, cell) in self.cells.iter().enumerate() {
            grid.set(index, cell.value);
        }
        grid
    }
}
