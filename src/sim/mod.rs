//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick rate only
//! - Seeded RNG only
//! - Stable iteration order (collections scanned back to front)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod input;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidField, Tier};
pub use collision::{Hit, point_in_circle, resolve_collisions};
pub use input::{Key, KeyEvent, TickInput, apply_key_event};
pub use ship::{Laser, LaserRemoval, Ship};
pub use state::{GameEvent, GameState};
pub use tick::tick;
