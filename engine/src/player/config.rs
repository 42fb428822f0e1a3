//! Player tuning configuration
//!
//! Every gameplay constant of the character controller in one struct, with
//! JSON load/save so designers can iterate on feel without recompiling.
//! JSON is used for human-inspectability.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::{FOV_SMOOTH_RATE, GRAPPLE_FOV, LOOK_SENSITIVITY, NORMAL_FOV};

/// Tuning values for locomotion, look, jump, grapple, and camera feedback.
///
/// `Default` holds the shipped values; a config file only needs to list the
/// fields it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Look sensitivity in degrees per pointer-delta unit per second
    pub mouse_sensitivity: f32,
    /// Ground movement speed in m/s
    pub movement_speed: f32,
    /// Upward velocity applied by a jump, in m/s
    pub jump_force: f32,
    /// Gravity acceleration in m/s² (negative = down)
    pub gravity: f32,
    /// Resting downward velocity while grounded, in m/s. Keeps the body
    /// pressed to the ground without accumulating fall speed.
    pub grounded_fall_clamp: f32,

    /// Capsule half-height in meters (1.8 m character)
    pub capsule_half_height: f32,
    /// Capsule radius in meters
    pub capsule_radius: f32,
    /// Camera eye height above the capsule center, in meters
    pub eye_height: f32,

    /// Speed at which the rope visual extends toward the anchor, in m/s
    pub grapple_shooting_speed: f32,
    /// Multiplier applied to the distance-derived pull speed
    pub grapple_speed_multiplier: f32,
    /// Lower bound of the distance-derived pull speed, in m/s
    pub min_grapple_speed: f32,
    /// Upper bound of the distance-derived pull speed, in m/s
    pub max_grapple_speed: f32,
    /// Time budget of one grapple session, in seconds
    pub grapple_time: f32,
    /// Minimum anchor distance to commit a shot; also the arrival threshold
    pub min_grapple_dist: f32,

    /// Camera field of view at rest, in degrees
    pub normal_fov: f32,
    /// Camera field of view during the grapple pull, in degrees
    pub grapple_fov: f32,
    /// FOV smoothing rate (see the camera fov module)
    pub fov_smooth_rate: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: LOOK_SENSITIVITY,
            movement_speed: 10.0,
            jump_force: 10.0,
            gravity: -9.18,
            grounded_fall_clamp: -2.0,

            capsule_half_height: 0.9,
            capsule_radius: 0.4,
            eye_height: 0.7,

            grapple_shooting_speed: 140.0,
            grapple_speed_multiplier: 2.0,
            min_grapple_speed: 10.0,
            max_grapple_speed: 50.0,
            grapple_time: 3.0,
            min_grapple_dist: 1.5,

            normal_fov: NORMAL_FOV,
            grapple_fov: GRAPPLE_FOV,
            fov_smooth_rate: FOV_SMOOTH_RATE,
        }
    }
}

impl PlayerConfig {
    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Save this config to a JSON file (pretty-printed).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

/// Errors that can occur while loading or saving a player config.
#[derive(Debug)]
pub enum ConfigError {
    /// Filesystem error
    Io(std::io::Error),
    /// Malformed JSON or mismatched fields
    Json(serde_json::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config io error: {}", e),
            ConfigError::Json(e) => write!(f, "config json error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = PlayerConfig::default();
        assert_eq!(config.mouse_sensitivity, 500.0);
        assert_eq!(config.movement_speed, 10.0);
        assert_eq!(config.jump_force, 10.0);
        assert_eq!(config.gravity, -9.18);
        assert_eq!(config.grounded_fall_clamp, -2.0);
        assert_eq!(config.grapple_shooting_speed, 140.0);
        assert_eq!(config.grapple_speed_multiplier, 2.0);
        assert_eq!(config.min_grapple_speed, 10.0);
        assert_eq!(config.max_grapple_speed, 50.0);
        assert_eq!(config.grapple_time, 3.0);
        assert_eq!(config.min_grapple_dist, 1.5);
        assert_eq!(config.normal_fov, 60.0);
        assert_eq!(config.grapple_fov, 100.0);
        assert_eq!(config.fov_smooth_rate, 4.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = PlayerConfig::default();
        config.movement_speed = 12.5;
        config.grapple_time = 4.0;

        let text = serde_json::to_string(&config).unwrap();
        let parsed: PlayerConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: PlayerConfig = serde_json::from_str(r#"{"jump_force": 15.0}"#).unwrap();
        assert_eq!(parsed.jump_force, 15.0);
        assert_eq!(parsed.movement_speed, 10.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result: Result<PlayerConfig, _> = serde_json::from_str("{jump_force:");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = PlayerConfig::load("/nonexistent/player.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
