//! Simulation settings
//!
//! Every tunable constant recognized at initialization. Missing JSON keys
//! fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub fps: f64,

    // === Playfield ===
    pub width: f64,
    pub height: f64,

    // === Asteroids ===
    /// Vertex jaggedness (0 = round, 1 = very jagged)
    pub roid_jag: f64,
    /// Number of asteroids in a fresh belt
    pub roid_count: usize,
    /// Base asteroid size in pixels; a belt asteroid has radius `roid_size / 2`
    pub roid_size: f64,
    /// Max asteroid speed in pixels per second
    pub roid_speed: f64,
    /// Average vertex count per asteroid
    pub roid_vertices: u32,

    // === Ship ===
    /// Friction coefficient in [0, 1)
    pub friction: f64,
    /// Ship height in pixels (radius is half of this)
    pub ship_size: f64,
    /// Turn speed in degrees per second
    pub turn_speed: f64,
    /// Thrust acceleration in pixels per second per second
    pub ship_accel: f64,

    // === Lasers ===
    pub laser_max: usize,
    /// Laser speed in pixels per second
    pub laser_speed: f64,
    /// Max travel distance as a fraction of playfield width
    pub laser_dist: f64,
    /// Explosion duration in seconds
    pub laser_explode_dur: f64,

    // === Debug overlays ===
    /// Stroke each entity's collision circle
    pub show_bounding: bool,
    /// Mark each entity's centre point
    pub show_centre_dot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: FPS,

            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            roid_jag: ROIDS_JAG,
            roid_count: ROIDS_NUM,
            roid_size: ROIDS_SIZE,
            roid_speed: ROIDS_SPD,
            roid_vertices: ROIDS_VERT,

            friction: FRICTION,
            ship_size: SHIP_SIZE,
            turn_speed: TURN_SPEED,
            ship_accel: SHIP_ACCEL,

            laser_max: LASER_MAX,
            laser_speed: LASER_SPD,
            laser_dist: LASER_DIST,
            laser_explode_dur: LASER_EXPLODE_DUR,

            show_bounding: false,
            show_centre_dot: false,
        }
    }
}

impl Settings {
    /// Check every value against the range the simulation relies on
    pub fn validate(&self) -> SimResult<()> {
        positive("fps", self.fps)?;
        positive("width", self.width)?;
        positive("height", self.height)?;
        in_range("roid_jag", self.roid_jag, 0.0..=1.0, "[0, 1]")?;
        positive("roid_size", self.roid_size)?;
        non_negative("roid_speed", self.roid_speed)?;
        // The smallest roll is floor(avg / 2) vertices, which must still close a polygon
        if self.roid_vertices < 6 {
            return Err(SimError::InvalidSetting {
                name: "roid_vertices",
                value: self.roid_vertices as f64,
                expected: "[6, inf)",
            });
        }
        in_range("friction", self.friction, 0.0..1.0, "[0, 1)")?;
        positive("ship_size", self.ship_size)?;
        non_negative("turn_speed", self.turn_speed)?;
        non_negative("ship_accel", self.ship_accel)?;
        non_negative("laser_speed", self.laser_speed)?;
        positive("laser_dist", self.laser_dist)?;
        non_negative("laser_explode_dur", self.laser_explode_dur)?;
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> SimResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> SimResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Ship collision radius
    #[inline]
    pub fn ship_radius(&self) -> f64 {
        self.ship_size / 2.0
    }

    /// Heading change per tick while a turn key is held (radians)
    #[inline]
    pub fn turn_step(&self) -> f64 {
        self.turn_speed.to_radians() / self.fps
    }

    /// Distance at which a laser is retired
    #[inline]
    pub fn max_laser_distance(&self) -> f64 {
        self.laser_dist * self.width
    }

    /// Explosion countdown length for a laser that hit something
    #[inline]
    pub fn laser_explode_ticks(&self) -> u32 {
        (self.laser_explode_dur * self.fps).ceil() as u32
    }

    /// Minimum distance between a fresh belt asteroid and the ship centre
    #[inline]
    pub fn belt_clearance(&self) -> f64 {
        self.roid_size * 2.0 + self.ship_radius()
    }
}

fn positive(name: &'static str, value: f64) -> SimResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidSetting {
            name,
            value,
            expected: "(0, inf)",
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> SimResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidSetting {
            name,
            value,
            expected: "[0, inf)",
        })
    }
}

fn in_range(
    name: &'static str,
    value: f64,
    range: impl std::ops::RangeBounds<f64>,
    expected: &'static str,
) -> SimResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(SimError::InvalidSetting {
            name,
            value,
            expected,
        })
    }
}
