//! Lock-guarded facade over the seating core.
//!
//! `Cinema` is the only way the rest of the service touches the grid. Every
//! method takes the single process-wide mutex for its whole body and returns
//! owned data, so no reference into the grid ever escapes the critical
//! section. Nothing inside the lock awaits or does I/O.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::seating::error::SeatingError;
use crate::seating::finder::{self, Group};
use crate::seating::grid::{CinemaConfig, OccupancyMatrix, Seat, SeatGrid};
use crate::seating::reservation;

#[derive(Debug, Clone)]
pub struct Cinema {
    grid: Arc<Mutex<SeatGrid>>,
}

impl Cinema {
    pub fn new(config: CinemaConfig) -> Self {
        Self {
            grid: Arc::new(Mutex::new(SeatGrid::new(config))),
        }
    }

    /// Replaces the configuration. All existing reservations are discarded.
    pub fn configure(&self, config: CinemaConfig) {
        let discarded = {
            let mut grid = self.grid.lock();
            let discarded = grid.occupied_count();
            grid.configure(config);
            discarded
        };
        info!(
            rows = config.rows(),
            cols = config.cols(),
            min_distance = config.min_distance(),
            discarded,
            "Cinema reconfigured"
        );
    }

    pub fn find_groups(&self, group_size: usize) -> Vec<Group> {
        let groups = finder::find_groups(&self.grid.lock(), group_size);
        debug!(group_size, found = groups.len(), "Availability search");
        groups
    }

    pub fn reserve(&self, seats: &[Seat]) -> Result<(), SeatingError> {
        let result = reservation::reserve(&mut self.grid.lock(), seats);
        match &result {
            Ok(()) => info!(count = seats.len(), "Seats reserved"),
            Err(e) => warn!(count = seats.len(), "Reservation rejected: {e}"),
        }
        result
    }

    pub fn cancel(&self, seats: &[Seat]) -> Result<(), SeatingError> {
        let result = reservation::cancel(&mut self.grid.lock(), seats);
        match &result {
            Ok(()) => info!(count = seats.len(), "Seats cancelled"),
            Err(e) => warn!(count = seats.len(), "Cancellation rejected: {e}"),
        }
        result
    }

    /// Deep copy of the occupancy matrix.
    pub fn snapshot(&self) -> OccupancyMatrix {
        self.grid.lock().snapshot()
    }
}

impl Default for Cinema {
    fn default() -> Self {
        Self::new(CinemaConfig::default())
    }
}
