//! Ladder and canvas settings
//!
//! Persisted as JSON. Missing fields fall back to the reference constants.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{LadderError, Result};

/// Drawing surface dimensions (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
    /// Where lanes begin, measured from the top edge
    pub top_margin: f32,
    /// Where lanes end, measured from the bottom edge
    pub bottom_margin: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            top_margin: TOP_MARGIN,
            bottom_margin: BOTTOM_MARGIN,
        }
    }
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Vertical extent available to rows
    #[inline]
    pub fn ladder_height(&self) -> f32 {
        self.height - self.top_margin - self.bottom_margin
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [self.width, self.height, self.top_margin, self.bottom_margin]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(LadderError::InvalidCanvas("dimensions must be finite".into()));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LadderError::InvalidCanvas(format!(
                "size {}x{} must be positive",
                self.width, self.height
            )));
        }
        if self.top_margin < 0.0 || self.bottom_margin < 0.0 {
            return Err(LadderError::InvalidCanvas("margins must not be negative".into()));
        }
        if self.ladder_height() <= 0.0 {
            return Err(LadderError::InvalidCanvas(format!(
                "margins {}+{} leave no room in height {}",
                self.top_margin, self.bottom_margin, self.height
            )));
        }
        Ok(())
    }
}

/// Ladder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub canvas: Canvas,

    // === Ladder shape ===
    /// Rows per ladder (the last row never holds a rung)
    pub row_count: usize,
    /// Upper bound on roster size
    pub max_lanes: usize,

    // === Drawing ===
    /// Gap between a lane line and a rung it meets
    pub rung_gap: f32,
    pub rung_stroke: f32,
    pub lane_stroke: f32,
    pub path_stroke: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),

            row_count: ROW_COUNT,
            max_lanes: MAX_LANES,

            rung_gap: RUNG_GAP,
            rung_stroke: RUNG_STROKE,
            lane_stroke: LANE_STROKE,
            path_stroke: PATH_STROKE,
        }
    }
}

impl Settings {
    /// Check that the settings describe a drawable ladder
    pub fn validate(&self) -> Result<()> {
        self.canvas.validate()?;
        if self.row_count == 0 {
            return Err(LadderError::NoRows);
        }
        if self.max_lanes < MIN_LANES {
            return Err(LadderError::TooFewLanes {
                lane_count: self.max_lanes,
                min: MIN_LANES,
            });
        }
        Ok(())
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference() {
        let settings = Settings::default();
        assert_eq!(settings.row_count, 10);
        assert_eq!(settings.canvas.width, 600.0);
        assert_eq!(settings.canvas.height, 350.0);
        assert_eq!(settings.canvas.ladder_height(), 290.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "row_count": 14, "canvas": { "width": 800 } }"#)
            .unwrap();
        assert_eq!(settings.row_count, 14);
        assert_eq!(settings.canvas.width, 800.0);
        assert_eq!(settings.canvas.height, CANVAS_HEIGHT);
        assert_eq!(settings.lane_stroke, LANE_STROKE);
    }

    #[test]
    fn test_rejects_zero_rows() {
        let err = Settings::from_json(r#"{ "row_count": 0 }"#).unwrap_err();
        assert!(matches!(err, LadderError::NoRows));
    }

    #[test]
    fn test_rejects_margins_that_fill_canvas() {
        let canvas = Canvas {
            width: 100.0,
            height: 60.0,
            top_margin: 30.0,
            bottom_margin: 30.0,
        };
        assert!(matches!(canvas.validate(), Err(LadderError::InvalidCanvas(_))));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(Settings::from_json("{ nope"), Err(LadderError::Json(_))));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("ghost_leg_settings_{}.json", std::process::id()));
        let mut settings = Settings::default();
        settings.row_count = 12;
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }
}
