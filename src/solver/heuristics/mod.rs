//! Heuristics that steer the search.

pub mod variable;
