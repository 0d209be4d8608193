//! Game state and tick notifications
//!
//! The state is a plain aggregate: the ship (which owns its lasers), the
//! asteroid field, the settings and the seeded RNG. Observers read it after
//! each tick and drain the recorded events.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::asteroid::{AsteroidField, Tier};
use super::ship::Ship;
use crate::error::SimResult;
use crate::settings::Settings;

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A laser left the ship's nose
    LaserFired,
    /// A laser destroyed an asteroid
    AsteroidDestroyed { tier: Tier, pos: DVec2 },
    /// A laser reached its range limit without hitting anything
    LaserExpired,
    /// A laser finished its explosion
    LaserSpent,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Ship,
    pub field: AsteroidField,
    /// Events recorded since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Validate settings, centre the ship and roll a fresh belt around it
    pub fn new(settings: Settings, seed: u64) -> SimResult<Self> {
        settings.validate()?;

        let mut state = Self::empty(settings, seed);
        state.new_belt()?;
        log::info!(
            "New session: seed {}, {}x{} playfield at {} ticks/s",
            seed,
            state.settings.width,
            state.settings.height,
            state.settings.fps
        );
        Ok(state)
    }

    /// A state with the canonical ship and no asteroids
    pub fn empty(settings: Settings, seed: u64) -> Self {
        Self {
            ship: Ship::new(&settings),
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            field: AsteroidField::new(),
            events: Vec::new(),
        }
    }

    /// Replace the asteroid field with a fresh belt clear of the ship
    pub fn new_belt(&mut self) -> SimResult<()> {
        self.field
            .create_belt(self.ship.pos, self.ship.r, &self.settings, &mut self.rng)
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
