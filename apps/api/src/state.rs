use crate::seating::{Cinema, CinemaConfig};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single seating area. Cloning shares the same lock-guarded grid.
    pub cinema: Cinema,
}

impl AppState {
    pub fn new(layout: CinemaConfig) -> Self {
        Self {
            cinema: Cinema::new(layout),
        }
    }
}
