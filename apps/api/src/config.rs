use std::str::FromStr;

use anyhow::{Context, Result};

use crate::seating::grid::{DEFAULT_COLS, DEFAULT_MIN_DISTANCE, DEFAULT_ROWS};
use crate::seating::CinemaConfig;

/// Application configuration loaded from environment variables.
/// Every variable is optional; startup fails only on values that do not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Seating layout the grid starts with. `/configure` replaces it at runtime.
    pub cinema: CinemaConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cinema: layout(
                env_or("CINEMA_ROWS", DEFAULT_ROWS)?,
                env_or("CINEMA_COLS", DEFAULT_COLS)?,
                env_or("CINEMA_MIN_DISTANCE", DEFAULT_MIN_DISTANCE)?,
            )?,
        })
    }
}

/// Startup layout from already-parsed values.
fn layout(rows: usize, cols: usize, min_distance: usize) -> Result<CinemaConfig> {
    CinemaConfig::new(rows, cols, min_distance)
        .context("Invalid CINEMA_ROWS / CINEMA_COLS / CINEMA_MIN_DISTANCE")
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}
