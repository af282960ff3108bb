//! The solving core: board model, constraint checking, propagation, and the
//! backtracking search engine.

pub mod board;
pub mod candidates;
pub mod constraint;
pub mod digit;
pub mod engine;
pub mod frontier;
pub mod grid;
pub mod heuristics;
pub mod propagate;
pub mod solution;
pub mod stats;
