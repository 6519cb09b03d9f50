//! Availability search for contiguous horizontal groups.

use crate::seating::grid::{Seat, SeatGrid, SeatState};
use crate::seating::spacing::respects_spacing;

/// A candidate run of seats in one row with ascending, contiguous columns.
pub type Group = Vec<Seat>;

/// Scans every free cell in row-major order and emits the run of
/// `group_size` seats starting there when it fits in the row, is entirely
/// free, and respects the spacing rule.
///
/// One candidate per starting cell: overlapping runs are all reported.
/// A `group_size` of zero yields no groups.
pub fn find_groups(grid: &SeatGrid, group_size: usize) -> Vec<Group> {
    if group_size == 0 {
        return Vec::new();
    }

    let config = grid.config();
    let mut groups = Vec::new();

    for row in 0..config.rows() {
        for col in 0..config.cols() {
            if grid.state(Seat::new(row, col)) != Some(SeatState::Free) {
                continue;
            }
            if let Some(group) = candidate_at(grid, row, col, group_size) {
                groups.push(group);
            }
        }
    }

    groups
}

fn candidate_at(grid: &SeatGrid, row: usize, col: usize, group_size: usize) -> Option<Group> {
    if group_size > grid.config().cols() - col {
        return None;
    }

    let run: Group = (col..col + group_size).map(|c| Seat::new(row, c)).collect();

    if run.iter().any(|seat| grid.is_occupied(*seat)) {
        return None;
    }

    respects_spacing(grid, &run).then_some(run)
}
