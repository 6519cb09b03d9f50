//! Minimum-distance rule between candidate seats and occupied seats.
//!
//! The check is global: every candidate is compared against every occupied
//! seat in the grid, not just its neighbours. Candidates are never compared
//! with each other.

use crate::seating::grid::{Seat, SeatGrid};

/// Returns `true` when every candidate keeps at least `min_distance`
/// (Manhattan) from every occupied seat.
///
/// Cost is O(occupied × candidates).
pub fn respects_spacing(grid: &SeatGrid, candidates: &[Seat]) -> bool {
    let min_distance = grid.config().min_distance();
    grid.occupied_seats().all(|occupied| {
        candidates
            .iter()
            .all(|candidate| occupied.manhattan_distance(candidate) >= min_distance)
    })
}
