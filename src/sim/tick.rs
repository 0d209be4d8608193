//! Fixed timestep simulation tick
//!
//! One call advances the whole simulation by one tick. Every rate in the
//! settings is divided by the tick rate where it is used, so the outcome
//! depends on the tick count and never on wall-clock time.

use super::collision::resolve_collisions;
use super::input::{TickInput, apply_key_event};
use super::ship::LaserRemoval;
use super::state::{GameEvent, GameState};

/// Advance the game state by one tick.
///
/// Order: key edges, rotation and thrust, ship motion and wrap, lasers,
/// asteroids, collisions. Rendering is left to the caller.
pub fn tick(state: &mut GameState, input: &TickInput) {
    let GameState {
        settings,
        rng,
        ship,
        field,
        events,
        time_ticks,
        ..
    } = state;

    for &event in &input.events {
        if apply_key_event(ship, event, settings) {
            events.push(GameEvent::LaserFired);
        }
    }

    ship.rotate();
    ship.thrust(settings);
    ship.advance();
    ship.wrap(settings.width, settings.height);

    ship.advance_lasers(settings, |why| {
        events.push(match why {
            LaserRemoval::OutOfRange => GameEvent::LaserExpired,
            LaserRemoval::Spent => GameEvent::LaserSpent,
        })
    });

    field.step(settings.width, settings.height);

    for hit in resolve_collisions(field, &mut ship.lasers, settings, rng) {
        events.push(GameEvent::AsteroidDestroyed {
            tier: hit.tier,
            pos: hit.pos,
        });
    }

    *time_ticks += 1;
}
