//! Asteroid field
//!
//! Owns every live asteroid. Asteroids drift at a constant per-tick velocity,
//! wrap around the playfield, and split into two smaller rocks when shot
//! until they reach the smallest tier.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::error::{SimError, SimResult};
use crate::settings::Settings;
use crate::{dist_between_points, wrap_with_margin};

/// Asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Belt asteroid, radius `size / 2`
    Large,
    /// First split, radius `size / 4`
    Medium,
    /// Terminal tier, radius `size / 8`
    Small,
}

impl Tier {
    /// Radius of this tier for a given base asteroid size
    pub fn radius(self, roid_size: f64) -> f64 {
        match self {
            Tier::Large => roid_size / 2.0,
            Tier::Medium => roid_size / 4.0,
            Tier::Small => roid_size / 8.0,
        }
    }

    /// Tier of the two children spawned when this tier is destroyed
    pub fn split(self) -> Option<Tier> {
        match self {
            Tier::Large => Some(Tier::Medium),
            Tier::Medium => Some(Tier::Small),
            Tier::Small => None,
        }
    }
}

/// A single drifting rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: DVec2,
    /// Velocity in pixels per tick
    pub vel: DVec2,
    pub r: f64,
    pub tier: Tier,
    /// Layout angle of the first vertex (never changes)
    pub a: f64,
    /// Per-vertex radius multipliers; its length is the vertex count
    offs: Vec<f64>,
}

impl Asteroid {
    /// Roll a fresh asteroid of `tier` at `pos`
    pub fn new(pos: DVec2, tier: Tier, settings: &Settings, rng: &mut impl Rng) -> Self {
        let max_step = settings.roid_speed / settings.fps;
        let mut axis_speed = || {
            let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            rng.random::<f64>() * max_step * sign
        };
        let vel = DVec2::new(axis_speed(), axis_speed());

        let avg = settings.roid_vertices as f64;
        let vert = (rng.random::<f64>() * (avg + 1.0) + avg / 2.0).floor() as usize;

        let jag = settings.roid_jag;
        let offs = (0..vert)
            .map(|_| rng.random::<f64>() * jag * 2.0 + 1.0 - jag)
            .collect();

        Self {
            pos,
            vel,
            r: tier.radius(settings.roid_size),
            tier,
            a: rng.random::<f64>() * TAU,
            offs,
        }
    }

    /// Build an asteroid with explicit kinematics and vertex layout.
    ///
    /// The radius follows from `tier` and the base `roid_size`.
    pub fn with_shape(pos: DVec2, vel: DVec2, tier: Tier, roid_size: f64, a: f64, offs: Vec<f64>) -> Self {
        Self {
            pos,
            vel,
            r: tier.radius(roid_size),
            tier,
            a,
            offs,
        }
    }

    /// Number of outline vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offs.len()
    }

    /// Per-vertex radius multipliers
    #[inline]
    pub fn offsets(&self) -> &[f64] {
        &self.offs
    }

    /// Outline points in drawing order
    pub fn outline(&self) -> Vec<DVec2> {
        let vert = self.offs.len() as f64;
        self.offs
            .iter()
            .enumerate()
            .map(|(j, off)| {
                let theta = self.a + j as f64 * TAU / vert;
                self.pos + DVec2::new(theta.cos(), theta.sin()) * self.r * off
            })
            .collect()
    }
}

/// The set of live asteroids
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsteroidField {
    roids: Vec<Asteroid>,
}

impl AsteroidField {
    pub fn new() -> Self {
        Self { roids: Vec::new() }
    }

    /// Replace the field with a fresh belt that keeps clear of the ship
    ///
    /// Each spawn point is redrawn while it lies within
    /// [`Settings::belt_clearance`] of `ship_pos`. Fails instead of spinning
    /// forever when the playfield cannot fit the clearance.
    pub fn create_belt(
        &mut self,
        ship_pos: DVec2,
        ship_radius: f64,
        settings: &Settings,
        rng: &mut impl Rng,
    ) -> SimResult<()> {
        self.roids.clear();
        let clearance = settings.roid_size * 2.0 + ship_radius;

        for placed in 0..settings.roid_count {
            let mut attempts = 0;
            let pos = loop {
                if attempts == MAX_PLACEMENT_ATTEMPTS {
                    return Err(SimError::BeltPlacement {
                        placed,
                        requested: settings.roid_count,
                        attempts,
                    });
                }
                attempts += 1;

                let candidate = DVec2::new(
                    (rng.random::<f64>() * settings.width).floor(),
                    (rng.random::<f64>() * settings.height).floor(),
                );
                if dist_between_points(ship_pos, candidate) >= clearance {
                    break candidate;
                }
            };
            if attempts > MAX_PLACEMENT_ATTEMPTS / 10 {
                log::warn!("Asteroid {} needed {} placement attempts", placed, attempts);
            }
            self.roids.push(Asteroid::new(pos, Tier::Large, settings, rng));
        }

        log::info!(
            "Created belt of {} asteroids (clearance {:.1})",
            self.roids.len(),
            clearance
        );
        Ok(())
    }

    /// Advance every asteroid by its velocity and wrap it around the playfield
    pub fn step(&mut self, width: f64, height: f64) {
        for roid in &mut self.roids {
            roid.pos += roid.vel;
            roid.pos.x = wrap_with_margin(roid.pos.x, width, roid.r);
            roid.pos.y = wrap_with_margin(roid.pos.y, height, roid.r);
        }
    }

    /// Destroy the asteroid at `index`, appending its children.
    ///
    /// Returns the destroyed asteroid's tier, or `None` for an out-of-range
    /// index.
    pub fn destroy(&mut self, index: usize, settings: &Settings, rng: &mut impl Rng) -> Option<Tier> {
        let (pos, tier) = {
            let roid = self.roids.get(index)?;
            (roid.pos, roid.tier)
        };

        if let Some(child) = tier.split() {
            self.roids.push(Asteroid::new(pos, child, settings, rng));
            self.roids.push(Asteroid::new(pos, child, settings, rng));
            log::debug!("Split {:?} asteroid at ({:.1}, {:.1}) into two {:?}", tier, pos.x, pos.y, child);
        }

        self.roids.remove(index);
        Some(tier)
    }

    /// Add an asteroid directly
    pub fn push(&mut self, roid: Asteroid) {
        self.roids.push(roid);
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.roids
    }

    pub fn len(&self) -> usize {
        self.roids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roids.is_empty()
    }

    pub fn clear(&mut self) {
        self.roids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng(seed: u64) -> Pcg32 {
        Pcg32::seed_from_u64(seed)
    }

    #[test]
    fn test_tier_progression() {
        assert_eq!(Tier::Large.split(), Some(Tier::Medium));
        assert_eq!(Tier::Medium.split(), Some(Tier::Small));
        assert_eq!(Tier::Small.split(), None);

        assert_eq!(Tier::Large.radius(100.0), 50.0);
        assert_eq!(Tier::Medium.radius(100.0), 25.0);
        assert_eq!(Tier::Small.radius(100.0), 12.5);
    }

    #[test]
    fn test_new_asteroid_vertex_count_range() {
        let settings = Settings::default();
        let mut rng = rng(7);
        for _ in 0..500 {
            let roid = Asteroid::new(DVec2::ZERO, Tier::Large, &settings, &mut rng);
            // floor(r * 11 + 5) for an average of 10
            assert!((5..=15).contains(&roid.vertex_count()));
            assert_eq!(roid.offsets().len(), roid.vertex_count());
            let max_step = settings.roid_speed / settings.fps;
            assert!(roid.vel.x.abs() <= max_step);
            assert!(roid.vel.y.abs() <= max_step);
            assert!((0.0..TAU).contains(&roid.a));
        }
    }

    #[test]
    fn test_destroy_large_spawns_two_medium() {
        let settings = Settings::default();
        let mut rng = rng(1);
        let mut field = AsteroidField::new();
        let pos = DVec2::new(120.0, 80.0);
        field.push(Asteroid::new(pos, Tier::Large, &settings, &mut rng));

        assert_eq!(field.destroy(0, &settings, &mut rng), Some(Tier::Large));
        assert_eq!(field.len(), 2);
        for child in field.asteroids() {
            assert_eq!(child.tier, Tier::Medium);
            assert_eq!(child.r, 25.0);
            assert_eq!(child.pos, pos);
        }
    }

    #[test]
    fn test_full_lineage_yields_four_small_then_nothing() {
        let settings = Settings::default();
        let mut rng = rng(2);
        let mut field = AsteroidField::new();
        field.push(Asteroid::new(DVec2::new(300.0, 300.0), Tier::Large, &settings, &mut rng));

        // Large -> 2 Medium
        field.destroy(0, &settings, &mut rng);
        // Each Medium -> 2 Small
        while let Some(i) = field.asteroids().iter().position(|a| a.tier == Tier::Medium) {
            field.destroy(i, &settings, &mut rng);
        }
        assert_eq!(field.len(), 4);
        assert!(field.asteroids().iter().all(|a| a.tier == Tier::Small && a.r == 12.5));

        // Small -> nothing
        while !field.is_empty() {
            assert_eq!(field.destroy(0, &settings, &mut rng), Some(Tier::Small));
        }
        assert!(field.is_empty());
    }

    #[test]
    fn test_children_keep_parent_position_until_next_step() {
        let settings = Settings::default();
        let mut rng = rng(11);
        let mut field = AsteroidField::new();
        // Inside the large rock's wrap band, outside a medium rock's
        let pos = DVec2::new(-30.0, 300.0);
        field.push(Asteroid::with_shape(pos, DVec2::ZERO, Tier::Large, settings.roid_size, 0.0, vec![1.0; 8]));

        field.destroy(0, &settings, &mut rng);
        for child in field.asteroids() {
            assert_eq!(child.pos, pos);
            assert!(child.pos.x < -child.r);
        }

        field.step(settings.width, settings.height);
        for child in field.asteroids() {
            assert_eq!(child.pos.x, settings.width + child.r);
        }
    }

    #[test]
    fn test_with_shape_radius_follows_tier() {
        let large = Asteroid::with_shape(DVec2::ZERO, DVec2::ZERO, Tier::Large, 80.0, 0.0, vec![1.0; 6]);
        let small = Asteroid::with_shape(DVec2::ZERO, DVec2::ZERO, Tier::Small, 80.0, 0.0, vec![1.0; 6]);
        assert_eq!(large.r, 40.0);
        assert_eq!(small.r, 10.0);
    }

    #[test]
    fn test_destroy_out_of_range() {
        let settings = Settings::default();
        let mut field = AsteroidField::new();
        assert_eq!(field.destroy(3, &settings, &mut rng(0)), None);
    }

    #[test]
    fn test_step_moves_and_wraps() {
        let mut field = AsteroidField::new();
        field.push(Asteroid::with_shape(
            DVec2::new(-48.0, 300.0),
            DVec2::new(-2.0, 1.0),
            Tier::Large,
            100.0,
            0.0,
            vec![1.0; 8],
        ));
        field.push(Asteroid::with_shape(
            DVec2::new(400.0, 623.0),
            DVec2::new(0.0, 2.0),
            Tier::Medium,
            100.0,
            0.0,
            vec![1.0; 8],
        ));
        field.step(800.0, 600.0);

        let a = &field.asteroids()[0];
        assert_eq!(a.pos.x, 850.0);
        assert_eq!(a.pos.y, 301.0);
        let b = &field.asteroids()[1];
        assert_eq!(b.pos.x, 400.0);
        assert_eq!(b.pos.y, -25.0);
    }

    #[test]
    fn test_create_belt_replaces_field() {
        let settings = Settings::default();
        let mut rng = rng(3);
        let mut field = AsteroidField::new();
        field.push(Asteroid::new(DVec2::ZERO, Tier::Small, &settings, &mut rng));
        field
            .create_belt(DVec2::new(400.0, 300.0), 15.0, &settings, &mut rng)
            .unwrap();
        assert_eq!(field.len(), settings.roid_count);
        assert!(field.asteroids().iter().all(|a| a.tier == Tier::Large && a.r == 50.0));
    }

    #[test]
    fn test_create_belt_fails_on_tiny_playfield() {
        let settings = Settings {
            width: 100.0,
            height: 100.0,
            ..Default::default()
        };
        let mut field = AsteroidField::new();
        let err = field
            .create_belt(DVec2::new(50.0, 50.0), 15.0, &settings, &mut rng(4))
            .unwrap_err();
        assert!(matches!(
            err,
            SimError::BeltPlacement { placed: 0, attempts: MAX_PLACEMENT_ATTEMPTS, .. }
        ));
    }

    proptest! {
        #[test]
        fn prop_belt_keeps_clearance(seed in any::<u64>(), x in 0.0f64..800.0, y in 0.0f64..600.0) {
            let settings = Settings::default();
            let mut rng = rng(seed);
            let mut field = AsteroidField::new();
            let ship = DVec2::new(x, y);
            field.create_belt(ship, settings.ship_radius(), &settings, &mut rng).unwrap();
            for roid in field.asteroids() {
                prop_assert!(dist_between_points(ship, roid.pos) >= settings.belt_clearance());
            }
        }

        #[test]
        fn prop_vertex_floor_keeps_a_polygon(seed in any::<u64>(), avg in 6u32..=24) {
            let settings = Settings { roid_vertices: avg, ..Default::default() };
            let mut rng = rng(seed);
            let roid = Asteroid::new(DVec2::ZERO, Tier::Small, &settings, &mut rng);
            prop_assert!(roid.vertex_count() >= 3);
        }

        #[test]
        fn prop_jitter_within_jaggedness(seed in any::<u64>(), jag in 0.0f64..=1.0) {
            let settings = Settings { roid_jag: jag, ..Default::default() };
            let mut rng = rng(seed);
            let roid = Asteroid::new(DVec2::ZERO, Tier::Large, &settings, &mut rng);
            prop_assert_eq!(roid.offsets().len(), roid.vertex_count());
            for &off in roid.offsets() {
                prop_assert!(off >= 1.0 - jag - 1e-12 && off <= 1.0 + jag + 1e-12);
            }
        }
    }
}
