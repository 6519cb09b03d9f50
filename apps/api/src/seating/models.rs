//! Request / response bodies for the seating endpoints.
//!
//! Field rules are declared with `validator` attributes and enforced by the
//! `ValidatedJson` / `ValidatedQuery` extractors before anything reaches the
//! core. Coordinates arrive signed so that negative values are reported as
//! validation errors rather than parse failures.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::seating::grid::{CinemaConfig, Seat};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfigureRequest {
    #[validate(range(min = 1, message = "rows must be at least 1"))]
    pub rows: i64,
    #[validate(range(min = 1, message = "cols must be at least 1"))]
    pub cols: i64,
    #[validate(range(min = 1, message = "min_distance must be at least 1"))]
    pub min_distance: i64,
}

impl TryFrom<ConfigureRequest> for CinemaConfig {
    type Error = AppError;

    fn try_from(req: ConfigureRequest) -> Result<Self, Self::Error> {
        let rows = to_index(req.rows, "rows")?;
        let cols = to_index(req.cols, "cols")?;
        let min_distance = to_index(req.min_distance, "min_distance")?;
        Ok(CinemaConfig::new(rows, cols, min_distance)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AvailableSeatsQuery {
    #[validate(range(min = 1, message = "group_size must be at least 1"))]
    pub group_size: i64,
}

impl AvailableSeatsQuery {
    pub fn group_size(&self) -> Result<usize, AppError> {
        to_index(self.group_size, "group_size")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct SeatPayload {
    #[validate(range(min = 0, message = "row must not be negative"))]
    pub row: i64,
    #[validate(range(min = 0, message = "col must not be negative"))]
    pub col: i64,
}

impl TryFrom<SeatPayload> for Seat {
    type Error = AppError;

    fn try_from(payload: SeatPayload) -> Result<Self, Self::Error> {
        Ok(Seat::new(
            to_index(payload.row, "row")?,
            to_index(payload.col, "col")?,
        ))
    }
}

/// Body shared by reserve-seats and cancel-seats.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SeatBatchRequest {
    #[validate(length(min = 1, message = "seats must not be empty"), nested)]
    pub seats: Vec<SeatPayload>,
}

impl SeatBatchRequest {
    pub fn into_seats(self) -> Result<Vec<Seat>, AppError> {
        self.seats.into_iter().map(Seat::try_from).collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn to_index(value: i64, field: &str) -> Result<usize, AppError> {
    usize::try_from(value)
        .map_err(|_| AppError::Validation(format!("{field} must not be negative")))
}
