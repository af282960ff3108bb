//! Defines a collection of standard heuristics for selecting which open
//! cell to branch on next during the search process.

use std::cell::RefCell;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::solver::{board::Board, frontier::Frontier};

/// A trait for variable-selection heuristics.
///
/// Implementors define a strategy for choosing which frontier cell the
/// solver should branch on next. A good heuristic can dramatically shrink
/// the search tree.
pub trait VariableSelection {
    /// Picks the next cell to branch on, or `None` if the frontier is empty.
    fn select(&self, board: &Board, frontier: &Frontier) -> Option<usize>;
}

/// Selects the frontier cell with the fewest remaining candidates.
///
/// A "fail-first" strategy: branching on the most constrained cell prunes
/// the search tree fastest. Ties go to the lowest board index, because the
/// frontier iterates in ascending index order.
pub struct MinimumRemainingValues;

impl VariableSelection for MinimumRemainingValues {
    fn select(&self, board: &Board, frontier: &Frontier) -> Option<usize> {
        frontier
            .iter()
            .min_by_key(|&index| (board.candidates(index).len(), index))
    }
}

/// Selects the lowest-index open cell, ignoring domain sizes.
///
/// A basic deterministic baseline, mostly useful for comparison.
pub struct FirstOpen;

impl VariableSelection for FirstOpen {
    fn select(&self, _board: &Board, frontier: &Frontier) -> Option<usize> {
        frontier.iter().next()
    }
}

/// Selects a uniformly random open cell.
///
/// Seed it for reproducible runs; `Default` draws a fresh seed.
pub struct RandomOpen {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomOpen {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomOpen {
    fn default() -> Self {
        Self::seeded(rand::random())
    }
}

impl VariableSelection for RandomOpen {
    fn select(&self, _board: &Board, frontier: &Frontier) -> Option<usize> {
        use rand::seq::IteratorRandom;

        frontier.iter().choose(&mut *self.rng.borrow_mut())
    }
}
