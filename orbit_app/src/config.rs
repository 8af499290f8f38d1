//! Orbit demo configuration
//!
//! Loaded from a RON or TOML file, format chosen by extension. Missing
//! fields fall back to the defaults.

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameters of the orbiting camera demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Starting eye position.
    pub eye: Vec3,
    /// Point the camera keeps looking at.
    pub at: Vec3,
    /// World up direction, also the orbit axis.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Orbit step per frame, in degrees.
    pub degrees_per_frame: f32,
    /// Number of frames to simulate.
    pub frames: u32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 2.0, 5.0),
            at: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: 60.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
            degrees_per_frame: 1.5,
            frames: 240,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl OrbitConfig {
    /// Load configuration from a `.ron` or `.toml` file.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }
}
