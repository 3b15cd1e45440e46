//! Canvas backed by a CPU vertex list, uploaded once per frame

use glam::Vec2;

use super::vertex::Vertex;
use super::{font, shapes};
use crate::platform::{Canvas, Color, colors};

/// Collects one frame of triangles in screen pixels
#[derive(Debug, Clone)]
pub struct VertexCanvas {
    clear_color: Color,
    vertices: Vec<Vertex>,
}

impl Default for VertexCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            vertices: Vec::with_capacity(4096),
        }
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Canvas for VertexCanvas {
    /// Everything drawn before a clear is discarded
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        font::draw_text(&mut self.vertices, text, pos, size, color);
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        font::measure_text(text, size)
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        shapes::rect(&mut self.vertices, pos, size, color);
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        shapes::ellipse(
            &mut self.vertices,
            center,
            radii,
            color,
            shapes::segments_for(radii),
        );
    }
}
