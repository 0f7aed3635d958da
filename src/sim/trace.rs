//! Path tracing
//!
//! Walks a ladder from a start lane to its terminal lane, recording the
//! waypoints of the walk in canvas coordinates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ladder::LadderGraph;
use super::layout::Layout;
use crate::error::Result;

/// A traced path: the polyline to overlay and where it ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub start_lane: usize,
    pub terminal_lane: usize,
    pub waypoints: Vec<Vec2>,
}

impl PathResult {
    /// Number of rungs crossed on the way down
    pub fn crossings(&self) -> usize {
        self.waypoints
            .windows(2)
            .filter(|w| w[0].y == w[1].y && w[0].x != w[1].x)
            .count()
    }
}

/// Trace `start_lane` down through every row of `graph`.
///
/// Waypoints are: the lane top, then for each row the point where the path
/// meets that row (plus the point across the rung when one is taken), then
/// the lane bottom.
pub fn trace(graph: &LadderGraph, layout: &Layout, start_lane: usize) -> Result<PathResult> {
    graph.check_lane(start_lane)?;
    debug_assert_eq!(layout.lane_count(), graph.lane_count());
    debug_assert_eq!(layout.row_count(), graph.row_count());

    let mut lane = start_lane;
    let mut waypoints = Vec::with_capacity(graph.row_count() + graph.rung_count() + 2);
    waypoints.push(layout.lane_top(lane));

    for row in 0..graph.row_count() {
        waypoints.push(layout.point(lane, row));
        let next = graph.step(row, lane);
        if next != lane {
            lane = next;
            waypoints.push(layout.point(lane, row));
        }
    }

    waypoints.push(layout.lane_bottom(lane));

    log::debug!("Traced lane {} -> {} ({} waypoints)", start_lane, lane, waypoints.len());
    Ok(PathResult {
        start_lane,
        terminal_lane: lane,
        waypoints,
    })
}

/// Trace every lane, returning paths indexed by start lane
pub fn trace_all(graph: &LadderGraph, layout: &Layout) -> Result<Vec<PathResult>> {
    (0..graph.lane_count())
        .map(|lane| trace(graph, layout, lane))
        .collect()
}

/// True if `mapping` is a permutation of `0..mapping.len()`
pub fn is_permutation(mapping: &[usize]) -> bool {
    let mut seen = vec![false; mapping.len()];
    for &target in mapping {
        match seen.get_mut(target) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
