use tracing::{debug, trace};

use crate::solver::{
    board::Board,
    constraint,
    frontier::Frontier,
    grid::Grid,
    heuristics::variable::{MinimumRemainingValues, VariableSelection},
    propagate::{self, Assignment},
    solution::Solution,
};

/// Counters accumulated over one [`SolverEngine::solve`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Branching states entered.
    pub nodes: u64,
    /// Assignments undone after a failed recursive call.
    pub backtracks: u64,
    /// Peer candidates removed by forward checking.
    pub prunings: u64,
}

/// The main engine: depth-first backtracking search with forward checking.
///
/// The engine asks its variable-selection heuristic for a frontier cell,
/// validates each of the cell's candidates against the row/column/box
/// constraints, applies the surviving ones with their peer prunes, and
/// recurses; chronological backtracking reverses an assignment exactly when
/// the branch under it fails.
pub struct SolverEngine {
    variable_heuristic: Box<dyn VariableSelection>,
}

impl SolverEngine {
    pub fn new(variable_heuristic: Box<dyn VariableSelection>) -> Self {
        Self { variable_heuristic }
    }

    /// Attempts to solve the given puzzle.
    ///
    /// Returns the first solution found together with the search counters,
    /// or `None` and the counters if the puzzle has no completion. The
    /// engine never panics on a structurally valid 81-cell grid; it does not
    /// validate clue consistency up front, so contradictory clues simply
    /// exhaust the search.
    pub fn solve(&self, puzzle: &Grid) -> (Option<Solution>, SearchStats) {
        let mut board = Board::from_grid(puzzle);
        let mut frontier = Frontier::from_board(&board);
        let mut stats = SearchStats::default();
        let mut assignments = Vec::with_capacity(frontier.len());

        debug!(open_cells = frontier.len(), "starting search");
        let solved = self.search(&mut board, &mut frontier, &mut assignments, &mut stats);
        if solved {
            debug!(
                nodes = stats.nodes,
                backtracks = stats.backtracks,
                prunings = stats.prunings,
                "solved"
            );
            (Some(Solution::new(assignments, board.to_grid())), stats)
        } else {
            debug!(nodes = stats.nodes, "search space exhausted, no solution");
            (None, stats)
        }
    }

    fn search(
        &self,
        board: &mut Board,
        frontier: &mut Frontier,
        assignments: &mut Vec<Assignment>,
        stats: &mut SearchStats,
    ) -> bool {
        // Complete once every initially-open cell carries an assignment.
        if frontier.is_empty() {
            return true;
        }
        stats.nodes += 1;

        let Some(cell) = self.variable_heuristic.select(board, frontier) else {
            // Unreachable for a non-empty frontier; fail the branch rather
            // than panic on a misbehaving heuristic.
            return false;
        };

        // Snapshot the domain before iterating: removals below must not
        // shift the scan position.
        let snapshot = board.candidates(cell);
        // Digits pulled from this cell's domain at this depth, conflict
        // eliminations and failed trials alike.
        let mut removed = Vec::new();
        let mut solved = false;

        for digit in snapshot.iter() {
            match constraint::check(board, cell, digit) {
                None => {
                    // Direct conflict: drop the digit for the rest of this
                    // branch so deeper MRV counts see the smaller domain.
                    board.remove_candidate(cell, digit);
                    removed.push(digit);
                    trace!(cell, digit = digit.get(), "candidate conflicts");
                }
                Some(assignment) => {
                    stats.prunings += assignment.pruned().len() as u64;
                    trace!(
                        cell,
                        digit = digit.get(),
                        pruned = assignment.pruned().len(),
                        "assigning"
                    );
                    propagate::apply(board, frontier, &assignment);
                    assignments.push(assignment);

                    if self.search(board, frontier, assignments, stats) {
                        solved = true;
                        break;
                    }

                    let assignment = assignments.pop().expect("pushed before recursing");
                    propagate::undo(board, frontier, &assignment);
                    stats.backtracks += 1;
                    removed.push(assignment.digit);
                }
            }
        }

        if !solved {
            // Branch exhausted: hand the caller back exactly the domain it
            // gave us, so these digits stay reachable from shallower states.
            for digit in removed {
                board.restore_candidate(cell, digit);
            }
        }
        solved
    }
}

impl Default for SolverEngine {
    /// An engine with the MRV heuristic.
    fn default() -> Self {
        Self::new(Box::new(MinimumRemainingValues))
    }
}
