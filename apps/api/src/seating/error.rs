use thiserror::Error;

/// Failures raised by the seating core.
///
/// Every variant is a plain return value; none of them leave the grid lock
/// held or the process in a degraded state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Seat ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Seat ({row}, {col}) is already reserved")]
    AlreadyReserved { row: usize, col: usize },

    #[error("Seat ({row}, {col}) is not reserved")]
    NotReserved { row: usize, col: usize },
}
