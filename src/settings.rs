//! Maze settings
//!
//! Loaded from an optional JSON file; any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{MazeError, check_count, check_length};
use crate::layout::LayoutParams;

/// Maze and viewport configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Grid ===
    /// Vertical cell count
    pub rows: usize,
    /// Horizontal cell count
    pub cols: usize,

    // === Viewport ===
    /// Play-area width in engine units
    pub width: f32,
    /// Play-area height in engine units
    pub height: f32,

    // === Generation ===
    /// Fixed seed; a fresh one is drawn when absent
    pub seed: Option<u64>,

    // === Walls ===
    pub wall_thickness: f32,
    pub boundary_thickness: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,

            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            seed: None,

            wall_thickness: WALL_THICKNESS,
            boundary_thickness: BOUNDARY_THICKNESS,
        }
    }
}

impl Settings {
    /// Parse settings JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read settings {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Check every dimension before any generation happens
    pub fn validate(&self) -> Result<(), MazeError> {
        check_count("rows", self.rows)?;
        check_count("cols", self.cols)?;
        check_length("width", self.width)?;
        check_length("height", self.height)?;
        check_length("wall_thickness", self.wall_thickness)?;
        check_length("boundary_thickness", self.boundary_thickness)?;
        Ok(())
    }

    /// Cell size derived from the viewport
    pub fn layout_params(&self) -> Result<LayoutParams, MazeError> {
        LayoutParams::from_viewport(self.width, self.height, self.rows, self.cols)?
            .with_thickness(self.wall_thickness, self.boundary_thickness)
    }

    /// Configured seed or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(crate::maze::random_seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.rows, 10);
        assert_eq!(settings.cols, 15);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(r#"{ "rows": 4, "seed": 77 }"#).unwrap();
        assert_eq!(settings.rows, 4);
        assert_eq!(settings.cols, DEFAULT_COLS);
        assert_eq!(settings.seed, Some(77));
        assert_eq!(settings.resolve_seed(), 77);
    }

    #[test]
    fn test_malformed_json() {
        assert!(Settings::from_json("{ rows: ").is_err());
        assert!(Settings::from_json(r#"{ "rows": -1 }"#).is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/maze-chase.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_validate() {
        let bad = Settings {
            cols: 0,
            ..Default::default()
        };
        assert_eq!(bad.validate(), Err(MazeError::invalid("cols", 0.0)));

        let bad = Settings {
            width: -5.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_layout_params() {
        let settings = Settings {
            rows: 4,
            cols: 8,
            width: 800.0,
            height: 200.0,
            wall_thickness: 6.0,
            ..Default::default()
        };
        let params = settings.layout_params().unwrap();
        assert_eq!(params.unit_width, 100.0);
        assert_eq!(params.unit_height, 50.0);
        assert_eq!(params.wall_thickness, 6.0);
        assert_eq!(params.boundary_thickness, BOUNDARY_THICKNESS);
    }
}
