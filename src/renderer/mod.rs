//! Rendering module
//!
//! The simulation draws through the [`Canvas`] trait. [`MeshCanvas`]
//! tessellates into vertices; [`CommandList`] records intents for replay.

pub mod canvas;
pub mod draw;
pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, Color, CommandList, DrawCommand, Paint, Stroke, colors};
pub use draw::{draw_frame, flame_outline, ship_outline};
pub use mesh::MeshCanvas;
pub use vertex::Vertex;
