//! Ladder geometry
//!
//! Maps lane and row indices to canvas pixels. Drawing and path tracing both
//! read coordinates from here so the overlay lands exactly on the ladder.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ladder::LadderGraph;
use crate::settings::Canvas;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    lane_count: usize,
    row_count: usize,
    /// Horizontal distance between neighboring lanes
    lane_spacing: f32,
    /// Vertical distance between neighboring rows
    row_spacing: f32,
    top_y: f32,
    bottom_y: f32,
}

impl Layout {
    /// Layout for a ladder of the given shape
    pub fn new(lane_count: usize, row_count: usize, canvas: &Canvas) -> Self {
        Self {
            lane_count,
            row_count,
            lane_spacing: canvas.width / (lane_count + 1) as f32,
            row_spacing: canvas.ladder_height() / (row_count + 1) as f32,
            top_y: canvas.top_margin,
            bottom_y: canvas.height - canvas.bottom_margin,
        }
    }

    pub fn for_graph(graph: &LadderGraph, canvas: &Canvas) -> Self {
        Self::new(graph.lane_count(), graph.row_count(), canvas)
    }

    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// X coordinate of a lane's vertical line
    #[inline]
    pub fn lane_x(&self, lane: usize) -> f32 {
        self.lane_spacing * (lane + 1) as f32
    }

    /// Y coordinate of a row's rungs
    #[inline]
    pub fn row_y(&self, row: usize) -> f32 {
        self.top_y + self.row_spacing * (row + 1) as f32
    }

    /// Where every lane starts
    #[inline]
    pub fn top_y(&self) -> f32 {
        self.top_y
    }

    /// Where every lane ends
    #[inline]
    pub fn bottom_y(&self) -> f32 {
        self.bottom_y
    }

    /// Point on `lane` at `row`
    #[inline]
    pub fn point(&self, lane: usize, row: usize) -> Vec2 {
        Vec2::new(self.lane_x(lane), self.row_y(row))
    }

    #[inline]
    pub fn lane_top(&self, lane: usize) -> Vec2 {
        Vec2::new(self.lane_x(lane), self.top_y)
    }

    #[inline]
    pub fn lane_bottom(&self, lane: usize) -> Vec2 {
        Vec2::new(self.lane_x(lane), self.bottom_y)
    }

    /// Lower end of section `section` of a lane (sections `0..=row_count`).
    ///
    /// Section `r < row_count` ends at row `r`; the final section ends at the
    /// bottom of the lane.
    pub fn section_end_y(&self, section: usize) -> f32 {
        if section >= self.row_count {
            self.bottom_y
        } else {
            self.row_y(section)
        }
    }

    /// Upper end of section `section`
    pub fn section_start_y(&self, section: usize) -> f32 {
        if section == 0 {
            self.top_y
        } else {
            self.row_y(section - 1)
        }
    }
}
