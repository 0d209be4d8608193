//! Scene drawing
//!
//! Turns a [`GameState`] into drawing intents on a [`Canvas`]. Call after
//! each tick; nothing here mutates the simulation.

use glam::DVec2;

use super::canvas::{Canvas, Paint, colors};
use crate::sim::{Asteroid, GameState, Laser, Ship};

/// Ship triangle: nose, rear left, rear right
pub fn ship_outline(ship: &Ship) -> [DVec2; 3] {
    let (x, y, r, a) = (ship.pos.x, ship.pos.y, ship.r, ship.a);
    [
        ship.nose(),
        DVec2::new(
            x - r * (2.0 / 3.0 * a.cos() + a.sin()),
            y + r * (2.0 / 3.0 * a.sin() - a.cos()),
        ),
        DVec2::new(
            x - r * (2.0 / 3.0 * a.cos() - a.sin()),
            y + r * (2.0 / 3.0 * a.sin() + a.cos()),
        ),
    ]
}

/// Thruster flame behind the ship: rear left, tail, rear right
pub fn flame_outline(ship: &Ship) -> [DVec2; 3] {
    let (x, y, r, a) = (ship.pos.x, ship.pos.y, ship.r, ship.a);
    [
        DVec2::new(
            x - r * (2.0 / 3.0 * a.cos() + 0.5 * a.sin()),
            y + r * (2.0 / 3.0 * a.sin() - 0.5 * a.cos()),
        ),
        DVec2::new(x - r * 2.0 * a.cos(), y + r * 2.0 * a.sin()),
        DVec2::new(
            x - r * (2.0 / 3.0 * a.cos() - 0.5 * a.sin()),
            y + r * (2.0 / 3.0 * a.sin() + 0.5 * a.cos()),
        ),
    ]
}

/// Draw the whole scene
pub fn draw_frame(state: &GameState, canvas: &mut impl Canvas) {
    let settings = &state.settings;
    let line = settings.ship_size / 20.0;

    draw_ship(&state.ship, settings.ship_size, canvas);

    let roid_paint = Paint::stroke(colors::ASTEROID, line);
    for roid in state.field.asteroids() {
        draw_asteroid(roid, &roid_paint, canvas);
    }

    for laser in &state.ship.lasers {
        draw_laser(laser, &state.ship, settings.ship_size, canvas);
    }

    if settings.show_bounding {
        let paint = Paint::stroke(colors::BOUNDING, 1.0);
        canvas.circle(state.ship.pos, state.ship.r, &paint);
        for roid in state.field.asteroids() {
            canvas.circle(roid.pos, roid.r, &paint);
        }
    }

    if settings.show_centre_dot {
        centre_dot(state.ship.pos, canvas);
        for roid in state.field.asteroids() {
            centre_dot(roid.pos, canvas);
        }
    }
}

fn draw_ship(ship: &Ship, ship_size: f64, canvas: &mut impl Canvas) {
    if ship.thrusting {
        let flame = Paint::fill(colors::FLAME_FILL).with_stroke(colors::FLAME_STROKE, ship_size / 10.0);
        canvas.polygon(&flame_outline(ship), &flame);
    }
    canvas.polygon(&ship_outline(ship), &Paint::stroke(colors::SHIP, ship_size / 20.0));
}

fn draw_asteroid(roid: &Asteroid, paint: &Paint, canvas: &mut impl Canvas) {
    canvas.polygon(&roid.outline(), paint);
}

fn draw_laser(laser: &Laser, ship: &Ship, ship_size: f64, canvas: &mut impl Canvas) {
    if laser.is_exploding() {
        for (scale, color) in [
            (0.75, colors::EXPLOSION_OUTER),
            (0.5, colors::EXPLOSION_MIDDLE),
            (0.25, colors::EXPLOSION_INNER),
        ] {
            canvas.circle(laser.pos, ship.r * scale, &Paint::fill(color));
        }
    } else {
        canvas.circle(laser.pos, ship_size / 15.0, &Paint::fill(colors::LASER));
    }
}

fn centre_dot(pos: DVec2, canvas: &mut impl Canvas) {
    let square = [
        pos + DVec2::new(-1.0, -1.0),
        pos + DVec2::new(1.0, -1.0),
        pos + DVec2::new(1.0, 1.0),
        pos + DVec2::new(-1.0, 1.0),
    ];
    canvas.polygon(&square, &Paint::fill(colors::CENTRE_DOT));
}
