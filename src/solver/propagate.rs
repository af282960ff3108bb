//! Applying and reversing the side effects of an assignment.

use serde::{Deserialize, Serialize};

use crate::solver::{board::Board, digit::Digit, frontier::Frontier};

/// A validated assignment: the digit, the target cell, and the exact set of
/// peer cells whose candidate domains lose the digit when it is applied.
///
/// The prune set is captured at validation time and replayed verbatim by
/// [`undo`] — it is never recomputed, since peer state may have changed by
/// the time the search backtracks. It holds only peers that were open and
/// carried the digit at validation, each at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Board index of the assigned cell.
    pub cell: usize,
    /// The digit placed there.
    pub digit: Digit,
    pruned: Vec<usize>,
}

impl Assignment {
    pub(crate) fn new(cell: usize, digit: Digit, pruned: Vec<usize>) -> Self {
        Self {
            cell,
            digit,
            pruned,
        }
    }

    /// The peer cells pruned by this assignment.
    pub fn pruned(&self) -> &[usize] {
        &self.pruned
    }
}

/// Applies a validated assignment: prunes the recorded peers, removes the
/// digit from the assigned cell's own domain, sets the value, and shrinks
/// the frontier.
pub(crate) fn apply(board: &mut Board, frontier: &mut Frontier, assignment: &Assignment) {
    for &peer in &assignment.pruned {
        let removed = board.remove_candidate(peer, assignment.digit);
        debug_assert!(removed, "prune set listed a peer without the digit");
    }
    let removed = board.remove_candidate(assignment.cell, assignment.digit);
    debug_assert!(removed, "assigned digit missing from own domain");
    board.set_value(assignment.cell, assignment.digit);
    frontier.remove(assignment.cell);
}

/// Reverses [`apply`]: restores the digit to every recorded peer, clears the
/// value, and re-admits the cell to the frontier.
///
/// The assigned cell's own candidate entry stays removed here. The engine
/// restores it exactly once per branch, after the whole candidate snapshot
/// is exhausted, so a digit is not re-offered at the same depth it just
/// failed at.
pub(crate) fn undo(board: &mut Board, frontier: &mut Frontier, assignment: &Assignment) {
    for &peer in &assignment.pruned {
        board.restore_candidate(peer, assignment.digit);
    }
    board.clear_value(assignment.cell);
    frontier.restore(assignment.cell);
}
