//! Laser versus asteroid hit detection
//!
//! Both collections are scanned from the back so that removing an asteroid
//! mid-scan never skips one, and children appended by a split are not
//! tested until the next tick.

use glam::DVec2;
use rand::Rng;

use super::asteroid::{AsteroidField, Tier};
use super::ship::Laser;
use crate::dist_between_points;
use crate::settings::Settings;

/// A confirmed laser strike
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Tier of the asteroid that was destroyed
    pub tier: Tier,
    /// Where it was destroyed
    pub pos: DVec2,
}

/// Is `point` strictly inside a circle
#[inline]
pub fn point_in_circle(point: DVec2, center: DVec2, radius: f64) -> bool {
    dist_between_points(center, point) < radius
}

/// Test every flying laser against every asteroid.
///
/// A struck asteroid is split through [`AsteroidField::destroy`] and the laser
/// starts its explosion countdown; it stays in the pool until the countdown
/// runs out. Exploding lasers are ignored, so each laser scores at most once.
pub fn resolve_collisions(
    field: &mut AsteroidField,
    lasers: &mut [Laser],
    settings: &Settings,
    rng: &mut impl Rng,
) -> Vec<Hit> {
    let explode_ticks = settings.laser_explode_ticks();
    let mut hits = Vec::new();

    for i in (0..field.len()).rev() {
        let (center, radius) = {
            let roid = &field.asteroids()[i];
            (roid.pos, roid.r)
        };

        let struck = lasers
            .iter_mut()
            .rev()
            .find(|laser| !laser.is_exploding() && point_in_circle(laser.pos, center, radius));

        if let Some(laser) = struck {
            // A zero-length explosion would leave the laser flying
            laser.explode_time = explode_ticks.max(1);
            if let Some(tier) = field.destroy(i, settings, rng) {
                hits.push(Hit { tier, pos: center });
            }
        }
    }

    hits
}
