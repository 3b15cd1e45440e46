//! Triangle tessellation for the drawing primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::platform::Color;

/// Append a filled axis-aligned rectangle (two triangles)
pub fn rect(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: Color) {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    out.extend_from_slice(&[
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y1, color),
    ]);
}

/// Append a filled ellipse as a triangle fan around `center`
pub fn ellipse(out: &mut Vec<Vertex>, center: Vec2, radii: Vec2, color: Color, segments: u32) {
    let segments = segments.max(3);
    out.reserve((segments * 3) as usize);

    let point = |i: u32| {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        Vertex::new(
            center.x + radii.x * theta.cos(),
            center.y + radii.y * theta.sin(),
            color,
        )
    };

    for i in 0..segments {
        out.push(Vertex::new(center.x, center.y, color));
        out.push(point(i));
        out.push(point(i + 1));
    }
}

/// Fan segment count that keeps edges smooth at small and large radii
pub fn segments_for(radii: Vec2) -> u32 {
    (radii.max_element() * 2.0).clamp(12.0, 64.0) as u32
}
