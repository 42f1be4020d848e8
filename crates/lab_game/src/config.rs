// crates/lab_game/src/config.rs

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What happens when the player drops below the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallPolicy {
    /// The round ends in `Lost`.
    #[default]
    Lose,
    /// Teleport back to the level start and keep playing.
    Respawn,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Dead-zone size as fractions of the viewport.
    pub dead_zone: Vec2,
    /// Lerp factor applied per update, in (0, 1].
    pub smoothing: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            dead_zone: Vec2::new(0.25, 0.15),
            smoothing: 0.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub viewport: Vec2,
    pub camera: CameraConfig,
    pub fall_policy: FallPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(800.0, 600.0),
            camera: CameraConfig::default(),
            fall_policy: FallPolicy::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("viewport must be positive, got {0}")]
    InvalidViewport(Vec2),
    #[error("camera smoothing must be in (0, 1], got {0}")]
    InvalidSmoothing(f32),
    #[error("dead zone fractions must be in [0, 1], got {0}")]
    InvalidDeadZone(Vec2),
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport.x > 0.0 && self.viewport.y > 0.0) {
            return Err(ConfigError::InvalidViewport(self.viewport));
        }
        let s = self.camera.smoothing;
        if !(s > 0.0 && s <= 1.0) {
            return Err(ConfigError::InvalidSmoothing(s));
        }
        let dz = self.camera.dead_zone;
        if !(0.0..=1.0).contains(&dz.x) || !(0.0..=1.0).contains(&dz.y) {
            return Err(ConfigError::InvalidDeadZone(dz));
        }
        Ok(())
    }
}
