//! Demo Configuration
//!
//! Single source of truth for the aim, launch, projectile and ballistics
//! tuning of the demo. `Default` is the stock demo scene; a JSON file can
//! override any subset of fields.
//!
//! ```json
//! {
//!   "aim": { "max_pitch_deg": 60.0 },
//!   "launch": { "speed_multiplier": 25.0 },
//!   "ballistics": { "gravity": [0.0, -1.62, 0.0] }
//! }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::aim::AimConfig;
use crate::physics::{BallisticsConfig, LaunchConfig, Projectile};

/// The launchable projectile and where it starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Resting position; also the arrow's pivot
    pub initial_position: Vec3,
    /// Sphere radius (meters)
    pub radius: f32,
    /// Mass (kilograms)
    pub mass: f32,
    /// Drag coefficient (dimensionless)
    pub drag_coefficient: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            initial_position: Vec3::new(0.0, 0.25, 2.0),
            radius: 0.5,
            mass: 5.0,
            drag_coefficient: 0.47,
        }
    }
}

impl ProjectileConfig {
    pub fn build(&self) -> Projectile {
        Projectile::new(self.initial_position, self.radius)
            .with_mass(self.mass)
            .with_drag_coefficient(self.drag_coefficient)
    }
}

/// Central configuration for the demo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub aim: AimConfig,
    pub launch: LaunchConfig,
    pub projectile: ProjectileConfig,
    pub ballistics: BallisticsConfig,
    /// Fixed simulation rate for scripted replay (ticks per second)
    pub tick_rate_hz: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            aim: AimConfig::default(),
            launch: LaunchConfig::default(),
            projectile: ProjectileConfig::default(),
            ballistics: BallisticsConfig::default(),
            tick_rate_hz: Self::DEFAULT_TICK_RATE_HZ,
        }
    }
}

impl DemoConfig {
    /// Default tick rate used when none is configured
    pub const DEFAULT_TICK_RATE_HZ: f32 = 60.0;

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Seconds per simulation tick.
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }

    /// Reject tuning that would break the aim or trajectory invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let aim = &self.aim;
        require_non_negative("aim.angular_rate_deg", aim.angular_rate_deg)?;
        require_non_negative("aim.scale_rate", aim.scale_rate)?;
        require_non_negative("aim.max_pitch_deg", aim.max_pitch_deg)?;
        require_non_negative("aim.max_yaw_deg", aim.max_yaw_deg)?;
        if aim.max_pitch_deg > 90.0 {
            return Err(ConfigError::Invalid(format!(
                "aim.max_pitch_deg must be at most 90, got {}",
                aim.max_pitch_deg
            )));
        }
        if aim.max_yaw_deg > 180.0 {
            return Err(ConfigError::Invalid(format!(
                "aim.max_yaw_deg must be at most 180, got {}",
                aim.max_yaw_deg
            )));
        }
        require_positive("aim.min_scale", aim.min_scale)?;
        require_positive("aim.max_scale", aim.max_scale)?;
        if aim.min_scale > aim.max_scale {
            return Err(ConfigError::Invalid(format!(
                "aim.min_scale ({}) exceeds aim.max_scale ({})",
                aim.min_scale, aim.max_scale
            )));
        }
        for (name, value) in [
            ("aim.initial_pitch_deg", aim.initial_pitch_deg),
            ("aim.initial_yaw_deg", aim.initial_yaw_deg),
            ("aim.initial_power", aim.initial_power),
        ] {
            require_finite(name, value)?;
        }

        require_positive("launch.speed_multiplier", self.launch.speed_multiplier)?;
        require_positive("projectile.radius", self.projectile.radius)?;
        require_positive("projectile.mass", self.projectile.mass)?;
        require_non_negative("projectile.drag_coefficient", self.projectile.drag_coefficient)?;
        if !self.projectile.initial_position.is_finite() {
            return Err(ConfigError::Invalid(
                "projectile.initial_position must be finite".to_string(),
            ));
        }

        if !self.ballistics.gravity.is_finite() {
            return Err(ConfigError::Invalid(
                "ballistics.gravity must be finite".to_string(),
            ));
        }
        require_non_negative("ballistics.air_density", self.ballistics.air_density)?;
        require_finite("ballistics.ground_height", self.ballistics.ground_height)?;

        require_positive("tick_rate_hz", self.tick_rate_hz)
    }
}

fn require_finite(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be finite, got {value}")))
    }
}

fn require_positive(name: &str, value: f32) -> Result<(), ConfigError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
    }
}

fn require_non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must not be negative, got {value}"
        )))
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading a demo config.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON deserialization error.
    JsonError(serde_json::Error),
    /// Parsed, but a value is out of range.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::JsonError(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_rate_hz, 60.0);
        assert_eq!(config.launch.speed_multiplier, 20.0);
        assert_eq!(config.projectile.initial_position, Vec3::new(0.0, 0.25, 2.0));
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = DemoConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = DemoConfig::from_json_str(
            r#"{ "aim": { "max_pitch_deg": 60.0 }, "launch": { "speed_multiplier": 25.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.aim.max_pitch_deg, 60.0);
        assert_eq!(config.aim.max_yaw_deg, 90.0);
        assert_eq!(config.launch.speed_multiplier, 25.0);
    }

    #[test]
    fn test_inverted_scale_range_rejected() {
        let err = DemoConfig::from_json_str(r#"{ "aim": { "min_scale": 4.0, "max_scale": 2.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err}");
    }

    #[test]
    fn test_out_of_range_limits_rejected() {
        for json in [
            r#"{ "aim": { "max_pitch_deg": 120.0 } }"#,
            r#"{ "aim": { "max_yaw_deg": -1.0 } }"#,
            r#"{ "aim": { "min_scale": 0.0 } }"#,
            r#"{ "launch": { "speed_multiplier": 0.0 } }"#,
            r#"{ "projectile": { "radius": -0.5 } }"#,
            r#"{ "tick_rate_hz": 0.0 }"#,
        ] {
            assert!(
                matches!(DemoConfig::from_json_str(json), Err(ConfigError::Invalid(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = DemoConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::JsonError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DemoConfig::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_tick_dt() {
        let config = DemoConfig {
            tick_rate_hz: 50.0,
            ..Default::default()
        };
        assert!((config.tick_dt() - 0.02).abs() < 1e-7);
    }
}
