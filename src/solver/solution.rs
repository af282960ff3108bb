//! The result of a successful search.

use serde::{Deserialize, Serialize};

use crate::solver::{grid::Grid, propagate::Assignment};

/// A solved puzzle: the ordered assignments the search confirmed, and the
/// complete grid they produce.
///
/// The assignment list is the engine's primary output — replaying it over
/// the original puzzle reconstructs the solved grid, which is kept here
/// alongside it for convenience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    assignments: Vec<Assignment>,
    grid: Grid,
}

impl Solution {
    pub(crate) fn new(assignments: Vec<Assignment>, grid: Grid) -> Self {
        Self { assignments, grid }
    }

    /// The assignments in the order the search confirmed them.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// The solved grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replays the assignment list over the original puzzle.
    ///
    /// Equals [`grid`](Self::grid) whenever `puzzle` is the grid this
    /// solution was produced from.
    pub fn replay(&self, puzzle: &Grid) -> Grid {
        let mut grid = puzzle.clone();
        for assignment in &self.assignments {
            grid.set(assignment.cell, Some(assignment.digit));
        }
        grid
    }
}
