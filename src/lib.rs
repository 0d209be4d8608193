//! Rock Belt - A wrapped-playfield asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship, lasers, asteroid field, collisions)
//! - `renderer`: Drawing intents and a backend-neutral mesh canvas
//! - `settings`: Tunable configuration, loaded from JSON
//! - `error`: Configuration and placement errors

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{SimError, SimResult};
pub use settings::Settings;

use glam::DVec2;

/// Default tuning values
pub mod consts {
    /// Simulation ticks per second
    pub const FPS: f64 = 30.0;

    /// Playfield dimensions in pixels
    pub const PLAYFIELD_WIDTH: f64 = 800.0;
    pub const PLAYFIELD_HEIGHT: f64 = 600.0;

    /// Asteroid jaggedness (0 = none, 1 = lots)
    pub const ROIDS_JAG: f64 = 0.6;
    /// Starting number of asteroids
    pub const ROIDS_NUM: usize = 5;
    /// Starting size of asteroids in pixels
    pub const ROIDS_SIZE: f64 = 100.0;
    /// Max starting speed of asteroids in pixels per second
    pub const ROIDS_SPD: f64 = 50.0;
    /// Average number of vertices on each asteroid
    pub const ROIDS_VERT: u32 = 10;

    /// Friction coefficient of space (0 = none, 1 = lots)
    pub const FRICTION: f64 = 0.9;
    /// Ship height in pixels
    pub const SHIP_SIZE: f64 = 30.0;
    /// Turn speed in degrees per second
    pub const TURN_SPEED: f64 = 360.0;
    /// Acceleration of the ship in pixels per second per second
    pub const SHIP_ACCEL: f64 = 5.0;

    /// Maximum number of lasers on screen at once
    pub const LASER_MAX: usize = 10;
    /// Speed of lasers in pixels per second
    pub const LASER_SPD: f64 = 500.0;
    /// Max distance a laser can travel as a fraction of playfield width
    pub const LASER_DIST: f64 = 0.6;
    /// Duration of a laser's explosion in seconds
    pub const LASER_EXPLODE_DUR: f64 = 0.1;

    /// Redraws allowed per asteroid before belt placement gives up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;
}

/// Euclidean distance between two points
#[inline]
pub fn dist_between_points(a: DVec2, b: DVec2) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Unit vector for a heading on a canvas-style surface (y grows downward)
#[inline]
pub fn heading_vector(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), -angle.sin())
}

/// Toroidal wrap for one axis.
///
/// A coordinate at or beyond `-margin` re-enters at `extent + margin`, and
/// symmetrically for the high side. Ship and asteroids pass their radius as
/// the margin; lasers wrap flush with a margin of zero.
///
/// Both comparisons are inclusive, so a value resting exactly on a boundary
/// with no motion along this axis flips between `-margin` and
/// `extent + margin` on every call.
#[inline]
pub fn wrap_with_margin(value: f64, extent: f64, margin: f64) -> f64 {
    if value <= -margin {
        extent + margin
    } else if value >= extent + margin {
        -margin
    } else {
        value
    }
}
