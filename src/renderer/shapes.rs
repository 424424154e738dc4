//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(top_left: Vec2, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let x0 = top_left.x;
    let y0 = top_left.y;
    let x1 = top_left.x + width;
    let y1 = top_left.y + height;

    // Two triangles
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle with a vertical color gradient
pub fn rect_gradient_v(
    top_left: Vec2,
    width: f32,
    height: f32,
    top_color: [f32; 4],
    bottom_color: [f32; 4],
) -> Vec<Vertex> {
    let x0 = top_left.x;
    let y0 = top_left.y;
    let x1 = top_left.x + width;
    let y1 = top_left.y + height;

    vec![
        Vertex::new(x0, y0, top_color),
        Vertex::new(x0, y1, bottom_color),
        Vertex::new(x1, y0, top_color),
        Vertex::new(x1, y0, top_color),
        Vertex::new(x0, y1, bottom_color),
        Vertex::new(x1, y1, bottom_color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a line drawn as a thin quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = to - from;
    if dir.length_squared() < f32::EPSILON {
        return Vec::new();
    }
    let dir = dir.normalize();

    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}
