//! Aim tuning
//!
//! Rates and limits for the aim accumulators. Angles are authored in degrees
//! (config files, HUD) and converted to radians once, when a controller is
//! built from them.

use serde::{Deserialize, Serialize};

/// Aiming limits (in degrees)
pub mod limits {
    /// Maximum pitch above the horizon (degrees)
    pub const MAX_PITCH: f32 = 75.0;
    /// Maximum yaw to either side (degrees)
    pub const MAX_YAW: f32 = 90.0;
    /// Smallest power scale
    pub const MIN_SCALE: f32 = 0.1;
    /// Largest power scale
    pub const MAX_SCALE: f32 = 3.0;
}

/// Aim speed settings
pub mod aim_speed {
    /// Pitch/yaw rotation speed in degrees per second
    pub const ANGULAR_RATE: f32 = 90.0;
    /// Power scale change per second
    pub const SCALE_RATE: f32 = 1.5;
}

/// Starting aim
pub mod initial {
    /// Initial pitch (degrees)
    pub const PITCH: f32 = 20.0;
    /// Initial yaw (degrees)
    pub const YAW: f32 = 0.0;
    /// Initial power scale
    pub const POWER: f32 = 1.0;
}

/// Tuning for an [`AimController`](super::AimController).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AimConfig {
    /// Pitch and yaw rate (degrees/second)
    pub angular_rate_deg: f32,
    /// Pitch upper bound (degrees); the lower bound is the horizon
    pub max_pitch_deg: f32,
    /// Yaw bound to either side (degrees)
    pub max_yaw_deg: f32,
    /// Power scale rate (per second)
    pub scale_rate: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub initial_pitch_deg: f32,
    pub initial_yaw_deg: f32,
    pub initial_power: f32,
}

impl Default for AimConfig {
    fn default() -> Self {
        Self {
            angular_rate_deg: aim_speed::ANGULAR_RATE,
            max_pitch_deg: limits::MAX_PITCH,
            max_yaw_deg: limits::MAX_YAW,
            scale_rate: aim_speed::SCALE_RATE,
            min_scale: limits::MIN_SCALE,
            max_scale: limits::MAX_SCALE,
            initial_pitch_deg: initial::PITCH,
            initial_yaw_deg: initial::YAW,
            initial_power: initial::POWER,
        }
    }
}

/// Radian-space limits derived from an [`AimConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimLimits {
    pub angular_rate: f32,
    pub max_pitch: f32,
    pub max_yaw: f32,
    pub scale_rate: f32,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl From<&AimConfig> for AimLimits {
    fn from(config: &AimConfig) -> Self {
        Self {
            angular_rate: config.angular_rate_deg.to_radians(),
            max_pitch: config.max_pitch_deg.to_radians(),
            max_yaw: config.max_yaw_deg.to_radians(),
            scale_rate: config.scale_rate,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
        }
    }
}

impl Default for AimLimits {
    fn default() -> Self {
        Self::from(&AimConfig::default())
    }
}

impl AimLimits {
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        pitch.clamp(0.0, self.max_pitch)
    }

    pub fn clamp_yaw(&self, yaw: f32) -> f32 {
        yaw.clamp(-self.max_yaw, self.max_yaw)
    }

    pub fn clamp_power(&self, power: f32) -> f32 {
        power.clamp(self.min_scale, self.max_scale)
    }
}
