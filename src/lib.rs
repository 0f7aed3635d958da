//! Ghost Leg - an Amidakuji ladder puzzle
//!
//! Core modules:
//! - `sim`: Deterministic ladder model (generation, geometry, tracing, session)
//! - `renderer`: Line-segment drawing through a pluggable sink
//! - `palette`: Visually distinct per-lane colors
//! - `settings`: Canvas and ladder configuration

pub mod error;
pub mod palette;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{LadderError, NameRole, Result};
pub use palette::Hsl;
pub use settings::{Canvas, Settings};
pub use sim::{LadderGraph, Layout, Outcome, Pairing, PathResult, RungConnection, Session, SessionPhase};

/// Reference configuration constants
pub mod consts {
    /// Rows per ladder; the last one never holds a rung
    pub const ROW_COUNT: usize = 10;

    /// Lane bounds for a playable roster
    pub const MIN_LANES: usize = 2;
    pub const MAX_LANES: usize = 6;

    /// Chance that an eligible adjacent pair gets a rung
    pub const RUNG_PROBABILITY: f64 = 0.5;

    /// Canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 350.0;
    pub const TOP_MARGIN: f32 = 30.0;
    pub const BOTTOM_MARGIN: f32 = 30.0;

    /// Space left between a lane line and a rung it meets
    pub const RUNG_GAP: f32 = 3.0;

    /// Stroke widths
    pub const RUNG_STROKE: f32 = 2.0;
    pub const LANE_STROKE: f32 = 3.0;
    pub const PATH_STROKE: f32 = 4.0;
}
