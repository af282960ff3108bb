//! Nonet solves 9×9 Sudoku puzzles by modelling the grid as a constraint
//! satisfaction problem: each open cell is a variable whose domain is the
//! digits not yet ruled out, and every row, column, and 3×3 box demands nine
//! distinct digits.
//!
//! The engine runs depth-first backtracking search with two refinements:
//!
//! - **Forward checking** — applying an assignment immediately removes the
//!   digit from the candidate domains of the cell's open peers, and the exact
//!   set of pruned peers is recorded so backtracking can reverse it verbatim.
//! - **MRV variable selection** — the search branches on the open cell with
//!   the fewest remaining candidates, failing fast on the most constrained
//!   part of the board. The selection strategy is a trait, so alternative
//!   heuristics plug in.
//!
//! # Example
//!
//! ```
//! use nonet::solver::{engine::SolverEngine, grid::Grid};
//!
//! let puzzle: Grid = "\
//!     53--7----\
//!     6--195---\
//!     -98----6-\
//!     8---6---3\
//!     4--8-3--1\
//!     7---2---6\
//!     -6----28-\
//!     ---419--5\
//!     ----8--79"
//!     .parse()
//!     .unwrap();
//!
//! let (solution, stats) = SolverEngine::default().solve(&puzzle);
//! let solution = solution.expect("this puzzle has a completion");
//!
//! assert!(solution.grid().is_complete());
//! assert_eq!(solution.grid().get(2), nonet::solver::digit::Digit::new(4));
//! assert!(stats.nodes > 0);
//! ```
//!
//! A puzzle with no completion yields `None` rather than an error; see
//! [`solver::engine::SolverEngine::solve`].

pub mod error;
pub mod solver;
