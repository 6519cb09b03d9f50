//! Batch reserve / cancel over the grid.
//!
//! Seats are processed in order and each accepted seat is committed before
//! the next one is looked at. The first failing seat stops the batch; seats
//! already changed by the same call stay changed. Callers that see an error
//! should re-read the occupancy matrix before retrying.
//!
//! Spacing is not checked here, only during availability search.

use crate::seating::error::SeatingError;
use crate::seating::grid::{Seat, SeatGrid, SeatState};

/// Marks every seat `Occupied`. Fails on the first seat that is outside the
/// grid (`OutOfBounds`) or already taken (`AlreadyReserved`).
pub fn reserve(grid: &mut SeatGrid, seats: &[Seat]) -> Result<(), SeatingError> {
    for &seat in seats {
        match current_state(grid, seat)? {
            SeatState::Occupied => {
                return Err(SeatingError::AlreadyReserved {
                    row: seat.row,
                    col: seat.col,
                })
            }
            SeatState::Free => grid.set_state(seat, SeatState::Occupied)?,
        }
    }
    Ok(())
}

/// Marks every seat `Free`. Fails on the first seat that is outside the grid
/// (`OutOfBounds`) or not currently reserved (`NotReserved`).
pub fn cancel(grid: &mut SeatGrid, seats: &[Seat]) -> Result<(), SeatingError> {
    for &seat in seats {
        match current_state(grid, seat)? {
            SeatState::Free => {
                return Err(SeatingError::NotReserved {
                    row: seat.row,
                    col: seat.col,
                })
            }
            SeatState::Occupied => grid.set_state(seat, SeatState::Free)?,
        }
    }
    Ok(())
}

fn current_state(grid: &SeatGrid, seat: Seat) -> Result<SeatState, SeatingError> {
    grid.state(seat).ok_or_else(|| {
        let config = grid.config();
        SeatingError::OutOfBounds {
            row: seat.row,
            col: seat.col,
            rows: config.rows(),
            cols: config.cols(),
        }
    })
}
