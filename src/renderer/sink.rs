//! The drawing surface seam
//!
//! The ladder is drawn as nothing but straight line segments, so any surface
//! that can clear itself and stroke a line can show it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One stroked line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
    pub stroke_width: f32,
    pub color: [f32; 4],
}

impl LineSegment {
    pub const fn new(start: Vec2, end: Vec2, stroke_width: f32, color: [f32; 4]) -> Self {
        Self {
            start,
            end,
            stroke_width,
            color,
        }
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}

/// Write-only line drawing target
pub trait LineSink {
    /// Erase everything drawn so far
    fn clear(&mut self);

    fn line(&mut self, segment: &LineSegment);

    /// Stroke a connected polyline as consecutive segments
    fn polyline(&mut self, points: &[Vec2], stroke_width: f32, color: [f32; 4]) {
        for pair in points.windows(2) {
            if pair[0] != pair[1] {
                self.line(&LineSegment::new(pair[0], pair[1], stroke_width, color));
            }
        }
    }
}

/// Records segments in draw order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub segments: Vec<LineSegment>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl LineSink for DrawList {
    fn clear(&mut self) {
        self.segments.clear();
    }

    fn line(&mut self, segment: &LineSegment) {
        self.segments.push(*segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_skips_repeated_points() {
        let mut list = DrawList::new();
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 5.0),
            Vec2::new(0.0, 5.0),
            Vec2::new(4.0, 5.0),
        ];
        list.polyline(&points, 4.0, [1.0; 4]);
        assert_eq!(list.len(), 2);
        assert!(list.segments[0].is_vertical());
        assert!(list.segments[1].is_horizontal());
    }

    #[test]
    fn test_clear_empties_list() {
        let mut list = DrawList::new();
        list.line(&LineSegment::new(Vec2::ZERO, Vec2::ONE, 1.0, [0.0; 4]));
        list.clear();
        assert!(list.is_empty());
    }
}
