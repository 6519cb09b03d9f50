use anyhow::Context;
use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::extractors::{ValidatedJson, ValidatedQuery};
use crate::seating::finder::Group;
use crate::seating::grid::{CinemaConfig, OccupancyMatrix};
use crate::seating::models::{
    AvailableSeatsQuery, ConfigureRequest, MessageResponse, SeatBatchRequest,
};
use crate::state::AppState;

/// POST /configure
pub async fn handle_configure(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ConfigureRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let config = CinemaConfig::try_from(req)?;
    state.cinema.configure(config);
    Ok(Json(MessageResponse::new("Configured")))
}

/// GET /available-seats?group_size=N
/// The scan is O(seats × occupied), so it runs on the blocking pool.
pub async fn handle_available_seats(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AvailableSeatsQuery>,
) -> Result<Json<Vec<Group>>, AppError> {
    let group_size = query.group_size()?;
    let cinema = state.cinema.clone();
    let groups = tokio::task::spawn_blocking(move || cinema.find_groups(group_size))
        .await
        .context("Availability search task failed")?;
    Ok(Json(groups))
}

/// POST /reserve-seats
pub async fn handle_reserve_seats(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SeatBatchRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let seats = req.into_seats()?;
    state.cinema.reserve(&seats)?;
    Ok(Json(MessageResponse::new("Seats booked")))
}

/// POST /cancel-seats
pub async fn handle_cancel_seats(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SeatBatchRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let seats = req.into_seats()?;
    state.cinema.cancel(&seats)?;
    Ok(Json(MessageResponse::new("Seats cancelled")))
}

/// GET /seats
pub async fn handle_list_seats(State(state): State<AppState>) -> Json<OccupancyMatrix> {
    Json(state.cinema.snapshot())
}
