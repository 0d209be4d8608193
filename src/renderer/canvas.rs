//! The 2D drawing surface the simulation draws onto
//!
//! Anything that can fill and stroke closed paths and circles can act as a
//! canvas. Styling is cosmetic; only the geometry is part of the contract.

use glam::DVec2;

/// RGBA color
pub type Color = [f32; 4];

/// Outline style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// How to paint a shape
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paint {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(Stroke { color, width }),
        }
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }
}

/// Injected drawing surface
pub trait Canvas {
    /// Closed polygon through `points`
    fn polygon(&mut self, points: &[DVec2], paint: &Paint);

    /// Full circle
    fn circle(&mut self, center: DVec2, radius: f64, paint: &Paint);
}

/// A recorded drawing intent
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polygon { points: Vec<DVec2>, paint: Paint },
    Circle { center: DVec2, radius: f64, paint: Paint },
}

/// Canvas that records every intent, for tests and for replaying onto a
/// real backend later
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay the recorded intents onto another canvas
    pub fn replay(&self, target: &mut impl Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Polygon { points, paint } => target.polygon(points, paint),
                DrawCommand::Circle {
                    center,
                    radius,
                    paint,
                } => target.circle(*center, *radius, paint),
            }
        }
    }
}

impl Canvas for CommandList {
    fn polygon(&mut self, points: &[DVec2], paint: &Paint) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            paint: *paint,
        });
    }

    fn circle(&mut self, center: DVec2, radius: f64, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint: *paint,
        });
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const SHIP: Color = [1.0, 1.0, 1.0, 1.0];
    pub const FLAME_FILL: Color = [1.0, 1.0, 0.0, 1.0];
    pub const FLAME_STROKE: Color = [1.0, 0.0, 0.0, 1.0];
    pub const ASTEROID: Color = [0.44, 0.5, 0.56, 1.0]; // slate grey
    pub const LASER: Color = [0.98, 0.5, 0.45, 1.0]; // salmon
    pub const EXPLOSION_OUTER: Color = [1.0, 0.27, 0.0, 1.0]; // orange red
    pub const EXPLOSION_MIDDLE: Color = [0.98, 0.5, 0.45, 1.0];
    pub const EXPLOSION_INNER: Color = [1.0, 0.75, 0.8, 1.0]; // pink
    pub const BOUNDING: Color = [0.0, 1.0, 0.0, 1.0];
    pub const CENTRE_DOT: Color = [1.0, 0.0, 0.0, 1.0];
}
