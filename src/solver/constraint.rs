//! Peer-conflict checking over the row, column, and box groups.

use crate::solver::{
    board::{box_cells, col_cells, row_cells, Board},
    digit::Digit,
    propagate::Assignment,
};

/// Validates placing `digit` at `cell` against its three peer groups.
///
/// Returns `None` if any other cell in the row, column, or box already holds
/// `digit` — given clue or search assignment, both sides of the comparison
/// use the one `Option<Digit>` representation. Otherwise returns the
/// [`Assignment`] carrying the union of the open peers that still have
/// `digit` in their domain, deduplicated across the three groups (row/box
/// and column/box overlap).
///
/// The check never mutates the board; the engine owns the conflict-driven
/// domain shrinking so it can scope it to the current branch.
pub fn check(board: &Board, cell: usize, digit: Digit) -> Option<Assignment> {
    let mut pruned = Vec::new();
    let mut seen = 0u128;

    let mut scan = |peers: &mut dyn Iterator<Item = usize>| {
        for peer in peers {
            if peer == cell {
                continue;
            }
            if board.value(peer) == Some(digit) {
                return false;
            }
            if board.is_open(peer)
                && board.candidates(peer).contains(digit)
                && seen & (1 << peer) == 0
            {
                seen |= 1 << peer;
                pruned.push(peer);
            }
        }
        true
    };

    if !scan(&mut row_cells(cell)) {
        return None;
    }
    if !scan(&mut col_cells(cell)) {
        return None;
    }
    if !scan(&mut box_cells(cell)) {
        return None;
    }
    Some(Assignment::new(cell, digit, pruned))
}
