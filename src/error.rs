//! Error types
//!
//! The simulation itself cannot fail once running. Errors only arise from
//! configuration: out-of-range settings, an unreadable settings file, or a
//! playfield too small to place the asteroid belt around the ship.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A setting is outside the range the simulation supports
    #[error("setting '{name}' = {value} is outside {expected}")]
    InvalidSetting {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// Belt placement exhausted its redraw budget
    #[error(
        "could not place asteroid {placed} of {requested} clear of the ship after {attempts} attempts; \
         playfield too small for this belt"
    )]
    BeltPlacement {
        placed: usize,
        requested: usize,
        attempts: u32,
    },

    #[error("settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
