//! The frontier: cells not yet fixed and not yet assigned by the search.

use crate::solver::{board::Board, grid::CELL_COUNT};

/// Membership set over the 81 cell indices, one bit per cell, with a cached
/// length.
///
/// Iteration is always ascending board index, so the MRV tie-break is
/// "lowest index" and branch order is reproducible across runs instead of
/// drifting with assignment/backtrack history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    bits: u128,
    len: usize,
}

impl Frontier {
    /// Collects every open cell of `board`.
    pub fn from_board(board: &Board) -> Self {
        let mut frontier = Self { bits: 0, len: 0 };
        for index in 0..CELL_COUNT {
            if board.is_open(index) {
                frontier.bits |= 1 << index;
                frontier.len += 1;
            }
        }
        frontier
    }

    pub fn contains(&self, index: usize) -> bool {
        self.bits & (1 << index) != 0
    }

    /// Drops a cell on assignment.
    pub fn remove(&mut self, index: usize) {
        debug_assert!(self.contains(index));
        self.bits &= !(1 << index);
        self.len -= 1;
    }

    /// Re-admits a cell on backtrack.
    pub fn restore(&mut self, index: usize) {
        debug_assert!(!self.contains(index));
        self.bits |= 1 << index;
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates the member indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(move |&index| self.contains(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::grid::Grid;

    #[test]
    fn tracks_open_cells_in_ascending_order() {
        let mut grid = Grid::new([None; CELL_COUNT]);
        for index in 0..CELL_COUNT {
            if index % 2 == 0 {
                grid.set(index, crate::solver::digit::Digit::new(1));
            }
        }
        let frontier = Frontier::from_board(&Board::from_grid(&grid));
        let members: Vec<usize> = frontier.iter().collect();
        assert_eq!(members, (0..CELL_COUNT).filter(|i| i % 2 == 1).collect::<Vec<_>>());
        assert_eq!(frontier.len(), members.len());
    }

    #[test]
    fn remove_and_restore_are_inverse() {
        let grid = Grid::new([None; CELL_COUNT]);
        let mut frontier = Frontier::from_board(&Board::from_grid(&grid));
        let before = frontier.clone();

        frontier.remove(17);
        assert!(!frontier.contains(17));
        assert_eq!(frontier.len(), CELL_COUNT - 1);

        frontier.restore(17);
        assert_eq!(frontier, before);
    }
}
