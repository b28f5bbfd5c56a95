//! Canvas configuration.

use crate::shapes::SerializableColor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Ambient settings a canvas applies to the shapes it creates.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Antialiasing flag copied onto each new shape.
    pub antialiasing: bool,
    /// Z-value given to each new shape.
    pub layer_index: i32,
    /// Pen color of the alignment grid.
    pub grid_color: SerializableColor,
    /// Hit-testing tolerance in scene units.
    pub hit_tolerance: f64,
    /// Minimum distance between committed polygon vertices.
    pub polygon_vertex_spacing: f64,
    /// Corner radius for rounded rectangles.
    pub corner_radius: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            antialiasing: true,
            layer_index: 1,
            grid_color: SerializableColor::new(204, 204, 204, 255),
            hit_tolerance: 4.0,
            polygon_vertex_spacing: 8.0,
            corner_radius: 10.0,
        }
    }
}

impl CanvasConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|e| {
            ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        log::debug!("Loaded canvas config from {}", path.display());
        Ok(config)
    }
}
