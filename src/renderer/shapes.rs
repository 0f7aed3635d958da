//! Shape generation for 2D primitives
//!
//! Turns line segments into triangle lists suitable for a vertex buffer.

use glam::Vec2;
use std::f32::consts::PI;

use super::sink::{LineSegment, LineSink};
use super::vertex::Vertex;

/// Segments used for the round caps that hide seams between path pieces
const CAP_SEGMENTS: u32 = 8;

/// Generate vertices for a thick line (two triangles)
pub fn line_quad(start: Vec2, end: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (end - start).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let v1a = start + perp;
    let v1b = start - perp;
    let v2a = end + perp;
    let v2b = end - perp;

    vec![
        Vertex::new(v1a.x, v1a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2b.x, v2b.y, color),
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

/// Collects segments as triangles.
///
/// Wide segments (the path overlay) get round caps so consecutive pieces of
/// a polyline join without notches.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<Vertex>,
    /// Segments at least this wide get round caps
    cap_threshold: f32,
}

impl MeshBuilder {
    pub fn new(cap_threshold: f32) -> Self {
        Self {
            vertices: Vec::new(),
            cap_threshold,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Raw bytes for uploading to a vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl LineSink for MeshBuilder {
    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn line(&mut self, segment: &LineSegment) {
        self.vertices
            .extend(line_quad(segment.start, segment.end, segment.stroke_width, segment.color));
        if self.cap_threshold > 0.0 && segment.stroke_width >= self.cap_threshold {
            let radius = segment.stroke_width / 2.0;
            self.vertices
                .extend(circle(segment.end, radius, segment.color, CAP_SEGMENTS));
        }
    }
}
