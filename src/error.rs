pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors produced while reading a puzzle into the solver.
///
/// The search core itself is infallible for a well-formed 81-cell grid; an
/// unsolvable puzzle is reported as an absent solution, not as an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("grid must contain 81 cells, found {0}")]
    BadLength(usize),

    #[error("invalid character {0:?} at cell {1}")]
    BadCell(char, usize),
}
