// Seating core: occupancy grid, spacing rule, availability search and
// batch reservation, plus the HTTP adapter that exposes them.
// All grid access goes through `Cinema`, which serialises it behind one lock.

pub mod cinema;
pub mod error;
pub mod finder;
pub mod grid;
pub mod handlers;
pub mod models;
pub mod reservation;
pub mod spacing;

pub use cinema::Cinema;
pub use error::SeatingError;
pub use grid::CinemaConfig;
