// src/config.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// Largest grid edge the startup prompt accepts.
pub const MAX_GRID_DIMENSION: usize = 50;

/// Editor settings. Missing keys in a settings file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Edge length of a rendered tile, in points.
    pub tile_size: f32,

    /// How far anchor points sit inside the tile border.
    pub anchor_inset: f32,

    /// Where the map is written on exit.
    pub output_path: PathBuf,

    /// Upper bound for both grid dimensions.
    pub max_dimension: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tile_size: 50.0,
            anchor_inset: 10.0,
            output_path: PathBuf::from("map1.json"),
            max_dimension: MAX_GRID_DIMENSION,
        }
    }
}

impl EditorSettings {
    /// Reads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let text = fs::read_to_string(path)?;
        let settings: EditorSettings = serde_json::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), MapError> {
        if !(self.tile_size > 0.0) {
            return Err(MapError::Malformed(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.anchor_inset < 0.0 || self.anchor_inset * 2.0 > self.tile_size {
            return Err(MapError::Malformed(format!(
                "anchor_inset {} does not fit a tile of {}",
                self.anchor_inset, self.tile_size
            )));
        }
        if self.max_dimension == 0 {
            return Err(MapError::Malformed("max_dimension must be at least 1".into()));
        }
        Ok(())
    }

    /// Checks a requested grid size against `1..=max_dimension`.
    pub fn check_dimensions(&self, width: usize, height: usize) -> Result<(), MapError> {
        let range = 1..=self.max_dimension;
        if range.contains(&width) && range.contains(&height) {
            Ok(())
        } else {
            Err(MapError::InvalidDimensions {
                width,
                height,
                max: self.max_dimension,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "output_path": "dungeon.json" }}"#).unwrap();

        let settings = EditorSettings::load(file.path()).unwrap();
        assert_eq!(settings.output_path, PathBuf::from("dungeon.json"));
        assert_eq!(settings.tile_size, 50.0);
        assert_eq!(settings.anchor_inset, 10.0);
        assert_eq!(settings.max_dimension, MAX_GRID_DIMENSION);
    }

    #[test]
    fn test_inset_larger_than_half_tile_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "tile_size": 20.0, "anchor_inset": 15.0 }}"#).unwrap();
        assert!(matches!(
            EditorSettings::load(file.path()),
            Err(MapError::Malformed(_))
        ));
    }

    #[test]
    fn test_check_dimensions() {
        let settings = EditorSettings::default();
        assert!(settings.check_dimensions(1, 1).is_ok());
        assert!(settings.check_dimensions(50, 50).is_ok());
        assert!(settings.check_dimensions(0, 5).is_err());
        assert!(settings.check_dimensions(5, 51).is_err());
    }
}
