//! Tessellating canvas
//!
//! Converts drawing intents into a triangle list that any GPU or software
//! rasterizer can consume as-is.

use glam::{DVec2, Vec2};

use super::canvas::{Canvas, Paint};
use super::shapes;
use super::vertex::Vertex;

/// Canvas that accumulates triangles
#[derive(Debug, Clone, Default)]
pub struct MeshCanvas {
    pub vertices: Vec<Vertex>,
}

impl MeshCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Raw bytes ready for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Canvas for MeshCanvas {
    fn polygon(&mut self, points: &[DVec2], paint: &Paint) {
        let points: Vec<Vec2> = points.iter().map(|p| p.as_vec2()).collect();
        if let Some(color) = paint.fill {
            self.vertices.extend(shapes::polygon_fill(&points, color));
        }
        if let Some(stroke) = paint.stroke {
            self.vertices
                .extend(shapes::polygon_stroke(&points, stroke.width as f32, stroke.color));
        }
    }

    fn circle(&mut self, center: DVec2, radius: f64, paint: &Paint) {
        let center = center.as_vec2();
        let radius = radius as f32;
        let segments = shapes::circle_segments(radius);
        if let Some(color) = paint.fill {
            self.vertices
                .extend(shapes::circle(center, radius, color, segments));
        }
        if let Some(stroke) = paint.stroke {
            let half = stroke.width as f32 / 2.0;
            self.vertices.extend(shapes::ring(
                center,
                (radius - half).max(0.0),
                radius + half,
                stroke.color,
                segments,
            ));
        }
    }
}
