//! Ladder and path overlay drawing
//!
//! Rungs are drawn first, then lanes. Each lane is split into one section per
//! row gap, and a section stops `rung_gap` short of any rung it meets so rung
//! and lane strokes never merge into a single line.

use glam::Vec2;

use super::sink::{LineSegment, LineSink};
use super::vertex::colors;
use crate::settings::Settings;
use crate::sim::{LadderGraph, Layout, PathResult, Session};

/// Stroke widths and spacing used for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub rung_gap: f32,
    pub rung_stroke: f32,
    pub lane_stroke: f32,
    pub path_stroke: f32,
}

impl From<&Settings> for Style {
    fn from(settings: &Settings) -> Self {
        Self {
            rung_gap: settings.rung_gap,
            rung_stroke: settings.rung_stroke,
            lane_stroke: settings.lane_stroke,
            path_stroke: settings.path_stroke,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

/// Emit the rungs of every row
fn draw_rungs(sink: &mut dyn LineSink, graph: &LadderGraph, layout: &Layout, style: &Style) {
    for (row, rungs) in graph.rows().enumerate() {
        let y = layout.row_y(row);
        for rung in rungs {
            sink.line(&LineSegment::new(
                Vec2::new(layout.lane_x(rung.from), y),
                Vec2::new(layout.lane_x(rung.to), y),
                style.rung_stroke,
                colors::LADDER,
            ));
        }
    }
}

/// Emit every lane as up to `row_count + 1` sections
fn draw_lanes(sink: &mut dyn LineSink, graph: &LadderGraph, layout: &Layout, style: &Style) {
    let rows = graph.row_count();
    for lane in 0..graph.lane_count() {
        let x = layout.lane_x(lane);
        for section in 0..=rows {
            let rung_below = section < rows && graph.rung_at(section, lane).is_some();
            let rung_above = section > 0 && graph.rung_at(section - 1, lane).is_some();

            let mut top = layout.section_start_y(section);
            let mut bottom = layout.section_end_y(section);
            if rung_above {
                top += style.rung_gap;
            }
            if rung_below {
                bottom -= style.rung_gap;
            }
            // Rows packed tighter than two gaps leave nothing to draw
            if bottom <= top {
                continue;
            }

            sink.line(&LineSegment::new(
                Vec2::new(x, top),
                Vec2::new(x, bottom),
                style.lane_stroke,
                colors::LADDER,
            ));
        }
    }
}

/// Clear the sink and draw the bare ladder
pub fn draw_ladder(sink: &mut dyn LineSink, graph: &LadderGraph, layout: &Layout, style: &Style) {
    sink.clear();
    draw_rungs(sink, graph, layout, style);
    draw_lanes(sink, graph, layout, style);
}

/// Draw a traced path on top of whatever is already on the sink
pub fn draw_path(sink: &mut dyn LineSink, path: &PathResult, color: [f32; 4], style: &Style) {
    sink.polyline(&path.waypoints, style.path_stroke, color);
}

/// Redraw a session: its ladder and, if revealed, the latest path in the
/// selected lane's color. Returns false (with the sink cleared) in Setup.
pub fn draw_session(sink: &mut dyn LineSink, session: &Session) -> bool {
    let style = Style::from(session.settings());
    let (Some(graph), Some(layout)) = (session.graph(), session.layout()) else {
        sink.clear();
        return false;
    };

    draw_ladder(sink, graph, layout, &style);
    if let Some(path) = session.overlay() {
        let color = session
            .lane_color(path.start_lane)
            .map(|c| c.to_rgba())
            .unwrap_or(colors::PATH_FALLBACK);
        draw_path(sink, path, color, &style);
    }
    true
}
