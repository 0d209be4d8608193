//! Keyboard edge events
//!
//! The simulation never polls key state. Each tick receives the key-down and
//! key-up edges that arrived since the previous tick, in arrival order.

use serde::{Deserialize, Serialize};

use super::ship::Ship;
use crate::settings::Settings;

/// Logical keys understood by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
}

impl Key {
    /// Map a browser-style key code to a logical key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::RotateLeft),
            "ArrowRight" => Some(Key::RotateRight),
            "ArrowUp" => Some(Key::Thrust),
            "Space" => Some(Key::Fire),
            _ => None,
        }
    }
}

/// A single key edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<KeyEvent>,
}

impl TickInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(mut self, key: Key) -> Self {
        self.events.push(KeyEvent::Down(key));
        self
    }

    pub fn release(mut self, key: Key) -> Self {
        self.events.push(KeyEvent::Up(key));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Apply one key edge to the ship. Returns true if a laser was fired.
pub fn apply_key_event(ship: &mut Ship, event: KeyEvent, settings: &Settings) -> bool {
    match event {
        KeyEvent::Down(Key::RotateLeft) => ship.rotate = settings.turn_step(),
        KeyEvent::Down(Key::RotateRight) => ship.rotate = -settings.turn_step(),
        KeyEvent::Down(Key::Thrust) => ship.thrusting = true,
        KeyEvent::Down(Key::Fire) => return ship.shoot(settings),
        KeyEvent::Up(Key::RotateLeft | Key::RotateRight) => ship.rotate = 0.0,
        KeyEvent::Up(Key::Thrust) => ship.thrusting = false,
        KeyEvent::Up(Key::Fire) => ship.release_trigger(),
    }
    false
}
