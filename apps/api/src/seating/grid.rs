//! Occupancy grid and the configuration that shapes it.
//!
//! `SeatGrid` is the single owner of occupancy state. It stores cells in one
//! row-major buffer; the matrix dimensions always match the current
//! `CinemaConfig`.

use serde::Serialize;

use crate::seating::error::SeatingError;

pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;
pub const DEFAULT_MIN_DISTANCE: usize = 6;

/// Upper bound on `rows × cols`; larger layouts are rejected as invalid.
pub const MAX_SEATS: usize = 1_000_000;

/// Occupancy matrix as reported to callers: `rows × cols` of 0 (free) / 1 (occupied).
pub type OccupancyMatrix = Vec<Vec<u8>>;

/// Grid shape plus the minimum Manhattan distance kept around occupied seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CinemaConfig {
    rows: usize,
    cols: usize,
    min_distance: usize,
}

impl CinemaConfig {
    pub fn new(rows: usize, cols: usize, min_distance: usize) -> Result<Self, SeatingError> {
        if rows == 0 {
            return Err(SeatingError::InvalidConfiguration(
                "rows must be at least 1".to_string(),
            ));
        }
        if cols == 0 {
            return Err(SeatingError::InvalidConfiguration(
                "cols must be at least 1".to_string(),
            ));
        }
        if min_distance == 0 {
            return Err(SeatingError::InvalidConfiguration(
                "min_distance must be at least 1".to_string(),
            ));
        }
        match rows.checked_mul(cols) {
            Some(seats) if seats <= MAX_SEATS => {}
            _ => {
                return Err(SeatingError::InvalidConfiguration(format!(
                    "rows x cols must not exceed {MAX_SEATS} seats"
                )))
            }
        }
        Ok(Self {
            rows,
            cols,
            min_distance,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn min_distance(&self) -> usize {
        self.min_distance
    }
}

impl Default for CinemaConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

/// A seat coordinate. Only meaningful against the grid it is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Seat {
    pub row: usize,
    pub col: usize,
}

impl Seat {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan_distance(&self, other: &Seat) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeatState {
    #[default]
    Free,
    Occupied,
}

impl SeatState {
    pub fn as_flag(self) -> u8 {
        match self {
            SeatState::Free => 0,
            SeatState::Occupied => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeatGrid {
    config: CinemaConfig,
    cells: Vec<SeatState>,
}

impl SeatGrid {
    pub fn new(config: CinemaConfig) -> Self {
        Self {
            config,
            cells: vec![SeatState::Free; config.rows * config.cols],
        }
    }

    /// Replaces the configuration and drops every existing reservation.
    pub fn configure(&mut self, config: CinemaConfig) {
        *self = Self::new(config);
    }

    pub fn config(&self) -> CinemaConfig {
        self.config
    }

    pub fn contains(&self, seat: Seat) -> bool {
        seat.row < self.config.rows && seat.col < self.config.cols
    }

    /// State of `seat`, or `None` when it falls outside the grid.
    pub fn state(&self, seat: Seat) -> Option<SeatState> {
        self.index(seat).map(|idx| self.cells[idx])
    }

    pub(crate) fn set_state(&mut self, seat: Seat, state: SeatState) -> Result<(), SeatingError> {
        let idx = self.index(seat).ok_or(SeatingError::OutOfBounds {
            row: seat.row,
            col: seat.col,
            rows: self.config.rows,
            cols: self.config.cols,
        })?;
        self.cells[idx] = state;
        Ok(())
    }

    pub fn is_occupied(&self, seat: Seat) -> bool {
        self.state(seat) == Some(SeatState::Occupied)
    }

    /// Occupied seats in row-major order.
    pub fn occupied_seats(&self) -> impl Iterator<Item = Seat> + '_ {
        let cols = self.config.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == SeatState::Occupied)
            .map(move |(idx, _)| Seat::new(idx / cols, idx % cols))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|state| **state == SeatState::Occupied)
            .count()
    }

    /// Owned copy of the occupancy matrix; later mutations of the grid do not show up in it.
    pub fn snapshot(&self) -> OccupancyMatrix {
        self.cells
            .chunks(self.config.cols)
            .map(|row| row.iter().map(|state| state.as_flag()).collect())
            .collect()
    }

    fn index(&self, seat: Seat) -> Option<usize> {
        self.contains(seat).then(|| seat.row * self.config.cols + seat.col)
    }
}

impl Default for SeatGrid {
    fn default() -> Self {
        Self::new(CinemaConfig::default())
    }
}
