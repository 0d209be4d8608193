//! Player ship and its lasers

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::{heading_vector, wrap_with_margin};

/// A laser bolt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    pub pos: DVec2,
    /// Velocity in pixels per tick
    pub vel: DVec2,
    /// Total distance travelled so far
    pub dist: f64,
    /// Explosion countdown (0 = flying)
    pub explode_time: u32,
}

impl Laser {
    #[inline]
    pub fn is_exploding(&self) -> bool {
        self.explode_time > 0
    }
}

/// Why a laser left the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaserRemoval {
    /// Travelled past the range limit without hitting anything
    OutOfRange,
    /// Explosion animation finished
    Spent,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: DVec2,
    pub r: f64,
    /// Heading in radians (0 = right, pi/2 = up); accumulates without wrapping
    pub a: f64,
    /// Heading change applied each tick
    pub rotate: f64,
    pub thrusting: bool,
    /// Per-tick displacement, built up by thrust and bled off by friction
    pub thrust: DVec2,
    /// Open until a shot is fired, reopened by releasing the fire key
    pub can_shoot: bool,
    pub lasers: Vec<Laser>,
}

impl Ship {
    /// Ship at the centre of the playfield, facing up, at rest
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: DVec2::new(settings.width / 2.0, settings.height / 2.0),
            r: settings.ship_radius(),
            a: std::f64::consts::FRAC_PI_2,
            rotate: 0.0,
            thrusting: false,
            thrust: DVec2::ZERO,
            can_shoot: true,
            lasers: Vec::new(),
        }
    }

    /// Tip of the ship, where lasers spawn
    #[inline]
    pub fn nose(&self) -> DVec2 {
        self.pos + heading_vector(self.a) * (4.0 / 3.0 * self.r)
    }

    /// Apply the current turn rate to the heading
    pub fn rotate(&mut self) {
        self.a += self.rotate;
    }

    /// Accelerate along the heading, or bleed off speed through friction
    pub fn thrust(&mut self, settings: &Settings) {
        if self.thrusting {
            self.thrust.x += settings.ship_accel * self.a.cos() / settings.fps;
            self.thrust.y -= settings.ship_accel * self.a.sin() / settings.fps;
        } else {
            self.thrust.x -= settings.friction * self.thrust.x / settings.fps;
            self.thrust.y -= settings.friction * self.thrust.y / settings.fps;
        }
    }

    /// Displace the ship by its thrust vector
    pub fn advance(&mut self) {
        self.pos += self.thrust;
    }

    /// Re-enter from the opposite edge once fully off the playfield
    pub fn wrap(&mut self, width: f64, height: f64) {
        self.pos.x = wrap_with_margin(self.pos.x, width, self.r);
        self.pos.y = wrap_with_margin(self.pos.y, height, self.r);
    }

    /// Fire a laser from the nose if the latch is open and the pool has room.
    ///
    /// The latch closes on every fire command and only reopens through
    /// [`Ship::release_trigger`]. Returns whether a laser was spawned.
    pub fn shoot(&mut self, settings: &Settings) -> bool {
        let fired = self.can_shoot && self.lasers.len() < settings.laser_max;
        if fired {
            self.lasers.push(Laser {
                pos: self.nose(),
                vel: heading_vector(self.a) * settings.laser_speed / settings.fps,
                dist: 0.0,
                explode_time: 0,
            });
            log::debug!("Laser fired ({} live)", self.lasers.len());
        }
        self.can_shoot = false;
        fired
    }

    /// Reopen the shoot latch (fire key released)
    pub fn release_trigger(&mut self) {
        self.can_shoot = true;
    }

    /// Move, age and retire lasers.
    ///
    /// Range is checked before moving, so a laser that crossed the limit
    /// this tick is still drawn once and removed on the next call.
    /// `on_remove` is told why each laser left the pool.
    pub fn advance_lasers(&mut self, settings: &Settings, mut on_remove: impl FnMut(LaserRemoval)) {
        let max_dist = settings.max_laser_distance();
        let (width, height) = (settings.width, settings.height);

        self.lasers.retain_mut(|laser| {
            if laser.dist > max_dist {
                on_remove(LaserRemoval::OutOfRange);
                return false;
            }

            if laser.explode_time > 0 {
                laser.explode_time -= 1;
                if laser.explode_time == 0 {
                    on_remove(LaserRemoval::Spent);
                    return false;
                }
                return true;
            }

            laser.pos += laser.vel;
            laser.dist += laser.vel.length();
            laser.pos.x = wrap_with_margin(laser.pos.x, width, 0.0);
            laser.pos.y = wrap_with_margin(laser.pos.y, height, 0.0);
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_ship_canonical_state() {
        let settings = Settings::default();
        let ship = Ship::new(&settings);
        assert_eq!(ship.pos, DVec2::new(400.0, 300.0));
        assert_eq!(ship.r, 15.0);
        assert_eq!(ship.a, std::f64::consts::FRAC_PI_2);
        assert_eq!(ship.thrust, DVec2::ZERO);
        assert!(ship.can_shoot);
        assert!(ship.lasers.is_empty());
    }

    #[test]
    fn test_friction_decay() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        ship.thrust = DVec2::new(5.0, 0.0);
        ship.thrust(&settings);
        assert!((ship.thrust.x - 4.85).abs() < 1e-12);

        // Geometric decay never reaches exactly zero
        for _ in 0..1000 {
            ship.thrust(&settings);
        }
        assert!(ship.thrust.x > 0.0);
        assert!(ship.thrust.x < 1e-3);
    }

    #[test]
    fn test_thrust_along_heading() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        ship.thrusting = true;
        ship.thrust(&settings);
        // Facing up: y shrinks on a canvas-style surface
        assert!(ship.thrust.x.abs() < 1e-12);
        assert!((ship.thrust.y + 5.0 / 30.0).abs() < 1e-12);

        ship.advance();
        assert!(ship.pos.y < 300.0);
    }

    #[test]
    fn test_rotate_accumulates() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        ship.rotate = settings.turn_step();
        for _ in 0..30 {
            ship.rotate();
        }
        // A full second at 360 deg/s is one full turn, no modulo applied
        let expected = std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU;
        assert!((ship.a - expected).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_uses_height_for_vertical_axis() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        ship.pos = DVec2::new(400.0, 615.0);
        ship.wrap(settings.width, settings.height);
        assert_eq!(ship.pos.y, -15.0);

        ship.pos = DVec2::new(-15.0, 300.0);
        ship.wrap(settings.width, settings.height);
        assert_eq!(ship.pos.x, 815.0);
    }

    #[test]
    fn test_shoot_spawns_at_nose() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        assert!(ship.shoot(&settings));
        let laser = &ship.lasers[0];
        assert!((laser.pos.x - 400.0).abs() < 1e-9);
        assert!((laser.pos.y - 280.0).abs() < 1e-9);
        assert!(laser.vel.x.abs() < 1e-9);
        assert!((laser.vel.y + 500.0 / 30.0).abs() < 1e-9);
        assert_eq!(laser.dist, 0.0);
        assert_eq!(laser.explode_time, 0);
    }

    #[test]
    fn test_shoot_respects_cap() {
        let settings = Settings {
            laser_max: 2,
            ..Default::default()
        };
        let mut ship = Ship::new(&settings);
        for _ in 0..5 {
            ship.shoot(&settings);
            ship.release_trigger();
        }
        assert_eq!(ship.lasers.len(), 2);
    }

    #[test]
    fn test_exploding_laser_holds_slot_until_spent() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        ship.shoot(&settings);
        ship.lasers[0].explode_time = 3;
        let pos = ship.lasers[0].pos;

        let mut removed = Vec::new();
        ship.advance_lasers(&settings, |why| removed.push(why));
        ship.advance_lasers(&settings, |why| removed.push(why));
        assert_eq!(ship.lasers.len(), 1);
        assert_eq!(ship.lasers[0].pos, pos);
        ship.advance_lasers(&settings, |why| removed.push(why));
        assert!(ship.lasers.is_empty());
        assert_eq!(removed, vec![LaserRemoval::Spent]);
    }

    #[test]
    fn test_laser_range_removal() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        ship.a = 0.0;
        ship.shoot(&settings);

        let max = settings.max_laser_distance();
        let mut last_dist = 0.0;
        let mut removed = Vec::new();
        loop {
            let before = ship.lasers[0].dist;
            ship.advance_lasers(&settings, |why| removed.push(why));
            if ship.lasers.is_empty() {
                // Removed on the first call that saw the limit exceeded
                assert!(before > max);
                assert!(last_dist <= max);
                break;
            }
            let dist = ship.lasers[0].dist;
            assert!(dist >= before);
            if dist <= max {
                last_dist = dist;
            }
        }
        assert_eq!(removed, vec![LaserRemoval::OutOfRange]);
    }

    #[test]
    fn test_laser_wraps_flush() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        ship.lasers.push(Laser {
            pos: DVec2::new(400.0, 2.0),
            vel: DVec2::new(0.0, -2.0),
            dist: 0.0,
            explode_time: 0,
        });
        ship.advance_lasers(&settings, |_| {});
        assert_eq!(ship.lasers[0].pos.y, settings.height);
    }

    proptest! {
        #[test]
        fn prop_held_trigger_fires_once(repeats in 1usize..50) {
            let settings = Settings::default();
            let mut ship = Ship::new(&settings);
            let fired = (0..repeats).filter(|_| ship.shoot(&settings)).count();
            prop_assert_eq!(fired, 1);
            prop_assert_eq!(ship.lasers.len(), 1);
        }
    }
}
